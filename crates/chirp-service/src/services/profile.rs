//! Profile service
//!
//! Resolves a user together with both directions of the follow graph.

use tracing::instrument;

use chirp_core::error::DomainError;
use chirp_db::map_db_error;

use crate::dto::{ProfileResponse, UserView};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the profile view for a user id.
    ///
    /// Followers and following are loaded with one bulk query per edge
    /// direction, names joined in; list order is the fetch order, no
    /// additional sorting.
    #[instrument(skip(self))]
    pub async fn build_profile(&self, user_id: i64) -> ServiceResult<ProfileResponse> {
        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(&mut tx, user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let followers = self.ctx.follow_repo().followers_of(&mut tx, user_id).await?;
        let following = self.ctx.follow_repo().following_of(&mut tx, user_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(ProfileResponse::new(
            UserView::from(user.as_ref_view()),
            followers.into_iter().map(UserView::from).collect(),
            following.into_iter().map(UserView::from).collect(),
        ))
    }
}
