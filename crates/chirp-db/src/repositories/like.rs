//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;

use chirp_core::entities::{Like, LikeWithUser};
use chirp_core::error::DomainError;

use crate::models::{LikeModel, LikeWithUserModel};

use super::error::{map_db_error, map_unique_violation};
use super::traits::{LikeRepository, RepoResult};

/// PostgreSQL implementation of LikeRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct PgLikeRepository;

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self, conn))]
    async fn find(
        &self,
        conn: &mut PgConnection,
        tweet_id: i64,
        user_id: i64,
    ) -> RepoResult<Option<Like>> {
        let result = sqlx::query_as::<_, LikeModel>(
            r"
            SELECT id, user_id, tweet_id
            FROM likes
            WHERE tweet_id = $1 AND user_id = $2
            ",
        )
        .bind(tweet_id)
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Like::from))
    }

    #[instrument(skip(self, conn))]
    async fn create(&self, conn: &mut PgConnection, tweet_id: i64, user_id: i64) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO likes (user_id, tweet_id)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(user_id)
        .bind(tweet_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LikeAlreadyExists))?;

        Ok(id)
    }

    #[instrument(skip(self, conn))]
    async fn delete(&self, conn: &mut PgConnection, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM likes WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::LikeNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self, conn))]
    async fn find_for_tweets(
        &self,
        conn: &mut PgConnection,
        tweet_ids: &[i64],
    ) -> RepoResult<Vec<LikeWithUser>> {
        let results = sqlx::query_as::<_, LikeWithUserModel>(
            r"
            SELECT l.tweet_id, l.user_id, u.name AS user_name
            FROM likes l
            JOIN users u ON u.id = l.user_id
            WHERE l.tweet_id = ANY($1)
            ORDER BY l.id
            ",
        )
        .bind(tweet_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(LikeWithUser::from).collect())
    }
}
