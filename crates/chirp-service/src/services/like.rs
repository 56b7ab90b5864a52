//! Like service
//!
//! Handles liking and unliking tweets.

use tracing::{info, instrument};

use chirp_core::error::DomainError;
use chirp_db::map_db_error;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a tweet.
    ///
    /// The duplicate guard reads the tweet's likes eagerly in the same
    /// transaction as the insert; the (user, tweet) unique constraint
    /// closes the remaining race between two concurrent identical likes.
    #[instrument(skip(self))]
    pub async fn add_like(&self, user_id: i64, tweet_id: i64) -> ServiceResult<()> {
        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        let tweet = self
            .ctx
            .tweet_repo()
            .find_with_likes(&mut tx, tweet_id)
            .await?
            .ok_or(DomainError::TweetNotFound(tweet_id))?;

        if tweet.has_like_from(user_id) {
            return Err(DomainError::LikeAlreadyExists.into());
        }

        self.ctx.like_repo().create(&mut tx, tweet_id, user_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(tweet_id, user_id, "Like added");

        Ok(())
    }

    /// Remove the requesting user's like from a tweet
    #[instrument(skip(self))]
    pub async fn remove_like(&self, user_id: i64, tweet_id: i64) -> ServiceResult<()> {
        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        self.ctx
            .tweet_repo()
            .find_with_likes(&mut tx, tweet_id)
            .await?
            .ok_or(DomainError::TweetNotFound(tweet_id))?;

        let like = self
            .ctx
            .like_repo()
            .find(&mut tx, tweet_id, user_id)
            .await?
            .ok_or(DomainError::LikeNotFound)?;

        self.ctx.like_repo().delete(&mut tx, like.id).await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(tweet_id, user_id, "Like removed");

        Ok(())
    }
}
