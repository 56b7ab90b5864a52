//! PostgreSQL implementation of TweetRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;

use chirp_core::entities::{Like, Tweet, TweetWithAuthor, TweetWithLikes};
use chirp_core::error::DomainError;

use crate::models::{LikeModel, TweetModel, TweetWithAuthorModel};

use super::error::map_db_error;
use super::traits::{RepoResult, TweetRepository};

/// PostgreSQL implementation of TweetRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct PgTweetRepository;

impl PgTweetRepository {
    /// Create a new PgTweetRepository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TweetRepository for PgTweetRepository {
    #[instrument(skip(self, conn))]
    async fn find_with_likes(
        &self,
        conn: &mut PgConnection,
        id: i64,
    ) -> RepoResult<Option<TweetWithLikes>> {
        let tweet = sqlx::query_as::<_, TweetModel>(
            r"
            SELECT id, body, media_ids, author_id
            FROM tweets
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        match tweet {
            Some(model) => {
                let likes = sqlx::query_as::<_, LikeModel>(
                    r"
                    SELECT id, user_id, tweet_id
                    FROM likes
                    WHERE tweet_id = $1
                    ORDER BY id
                    ",
                )
                .bind(id)
                .fetch_all(&mut *conn)
                .await
                .map_err(map_db_error)?;

                Ok(Some(TweetWithLikes {
                    tweet: Tweet::from(model),
                    likes: likes.into_iter().map(Like::from).collect(),
                }))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, conn, body))]
    async fn create(
        &self,
        conn: &mut PgConnection,
        body: &str,
        media_ids: &[i64],
        author_id: i64,
    ) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO tweets (body, media_ids, author_id)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(body)
        .bind(media_ids)
        .bind(author_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, conn))]
    async fn delete(&self, conn: &mut PgConnection, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM tweets WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TweetNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self, conn))]
    async fn find_by_authors(
        &self,
        conn: &mut PgConnection,
        author_ids: &[i64],
    ) -> RepoResult<Vec<TweetWithAuthor>> {
        let results = sqlx::query_as::<_, TweetWithAuthorModel>(
            r"
            SELECT t.id, t.body, t.media_ids, t.author_id, u.name AS author_name
            FROM tweets t
            JOIN users u ON u.id = t.author_id
            WHERE t.author_id = ANY($1)
            ORDER BY t.id
            ",
        )
        .bind(author_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TweetWithAuthor::from).collect())
    }
}
