//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;

use chirp_core::entities::{FollowEdge, UserRef};
use chirp_core::error::DomainError;

use crate::models::{FollowModel, UserRefModel};

use super::error::{map_db_error, map_unique_violation};
use super::traits::{FollowRepository, RepoResult};

/// PostgreSQL implementation of FollowRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct PgFollowRepository;

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self, conn))]
    async fn find(
        &self,
        conn: &mut PgConnection,
        follower_id: i64,
        followed_id: i64,
    ) -> RepoResult<Option<FollowEdge>> {
        let result = sqlx::query_as::<_, FollowModel>(
            r"
            SELECT follower_id, followed_id
            FROM follows
            WHERE follower_id = $1 AND followed_id = $2
            ",
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FollowEdge::from))
    }

    #[instrument(skip(self, conn))]
    async fn followed_ids(&self, conn: &mut PgConnection, follower_id: i64) -> RepoResult<Vec<i64>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT followed_id
            FROM follows
            WHERE follower_id = $1
            ",
        )
        .bind(follower_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self, conn))]
    async fn followers_of(&self, conn: &mut PgConnection, user_id: i64) -> RepoResult<Vec<UserRef>> {
        let results = sqlx::query_as::<_, UserRefModel>(
            r"
            SELECT u.id, u.name
            FROM follows f
            JOIN users u ON u.id = f.follower_id
            WHERE f.followed_id = $1
            ",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserRef::from).collect())
    }

    #[instrument(skip(self, conn))]
    async fn following_of(&self, conn: &mut PgConnection, user_id: i64) -> RepoResult<Vec<UserRef>> {
        let results = sqlx::query_as::<_, UserRefModel>(
            r"
            SELECT u.id, u.name
            FROM follows f
            JOIN users u ON u.id = f.followed_id
            WHERE f.follower_id = $1
            ",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserRef::from).collect())
    }

    #[instrument(skip(self, conn))]
    async fn create(
        &self,
        conn: &mut PgConnection,
        follower_id: i64,
        followed_id: i64,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO follows (follower_id, followed_id)
            VALUES ($1, $2)
            ",
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::FollowAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, conn))]
    async fn delete(
        &self,
        conn: &mut PgConnection,
        follower_id: i64,
        followed_id: i64,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2
            ",
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FollowNotFound);
        }

        Ok(())
    }
}
