//! Follow service
//!
//! Handles following and unfollowing users.

use tracing::{info, instrument};

use chirp_core::error::DomainError;
use chirp_db::map_db_error;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow another user.
    ///
    /// Three distinct failures: self-follow (validation, rejected before
    /// any store access), unknown target user (not found), and an already
    /// existing edge (conflict). The composite primary key closes the
    /// remaining race between two concurrent identical follows.
    #[instrument(skip(self))]
    pub async fn add_follow(&self, follower_id: i64, followed_id: i64) -> ServiceResult<()> {
        if follower_id == followed_id {
            return Err(DomainError::SelfFollow.into());
        }

        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        if !self.ctx.user_repo().exists(&mut tx, followed_id).await? {
            return Err(DomainError::UserNotFound(followed_id).into());
        }

        if self
            .ctx
            .follow_repo()
            .find(&mut tx, follower_id, followed_id)
            .await?
            .is_some()
        {
            return Err(DomainError::FollowAlreadyExists.into());
        }

        self.ctx
            .follow_repo()
            .create(&mut tx, follower_id, followed_id)
            .await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(follower_id, followed_id, "Follow added");

        Ok(())
    }

    /// Stop following another user
    #[instrument(skip(self))]
    pub async fn remove_follow(&self, follower_id: i64, followed_id: i64) -> ServiceResult<()> {
        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        self.ctx
            .follow_repo()
            .find(&mut tx, follower_id, followed_id)
            .await?
            .ok_or(DomainError::FollowNotFound)?;

        self.ctx
            .follow_repo()
            .delete(&mut tx, follower_id, followed_id)
            .await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(follower_id, followed_id, "Follow removed");

        Ok(())
    }
}
