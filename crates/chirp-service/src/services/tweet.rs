//! Tweet service
//!
//! Handles tweet creation and deletion.

use tracing::{info, instrument};

use chirp_core::entities::MAX_TWEET_LENGTH;
use chirp_core::error::DomainError;
use chirp_db::map_db_error;

use crate::dto::CreateTweetRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Tweet service
pub struct TweetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TweetService<'a> {
    /// Create a new TweetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a tweet for the authenticated author, returning the new id
    #[instrument(skip(self, request))]
    pub async fn create_tweet(
        &self,
        author_id: i64,
        request: &CreateTweetRequest,
    ) -> ServiceResult<i64> {
        if request.tweet_data.is_empty() {
            return Err(DomainError::EmptyTweet.into());
        }
        if request.tweet_data.chars().count() > MAX_TWEET_LENGTH {
            return Err(DomainError::TweetTooLong {
                max: MAX_TWEET_LENGTH,
            }
            .into());
        }

        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        let tweet_id = self
            .ctx
            .tweet_repo()
            .create(&mut tx, &request.tweet_data, &request.tweet_media_ids, author_id)
            .await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(tweet_id, author_id, "Tweet created");

        Ok(tweet_id)
    }

    /// Delete a tweet owned by the requesting user.
    ///
    /// The existence and ownership guards run in the same transaction as
    /// the delete; a failed guard rolls back leaving the tweet untouched.
    /// Likes on the tweet cascade at the store layer.
    #[instrument(skip(self))]
    pub async fn delete_tweet(&self, user_id: i64, tweet_id: i64) -> ServiceResult<()> {
        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        let tweet = self
            .ctx
            .tweet_repo()
            .find_with_likes(&mut tx, tweet_id)
            .await?
            .ok_or(DomainError::TweetNotFound(tweet_id))?;

        if !tweet.tweet.is_authored_by(user_id) {
            return Err(DomainError::NotTweetAuthor.into());
        }

        self.ctx.tweet_repo().delete(&mut tx, tweet_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(tweet_id, user_id, "Tweet deleted");

        Ok(())
    }
}
