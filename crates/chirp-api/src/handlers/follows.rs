//! Follow handlers
//!
//! Endpoints for following and unfollowing users.

use axum::extract::{Path, State};

use chirp_service::{FollowService, OperationResponse};

use crate::extractors::AuthUser;
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Follow a user
///
/// POST /api/users/{user_id}/follow
pub async fn add_follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<Created<ApiJson<OperationResponse>>> {
    let service = FollowService::new(state.service_context());
    service.add_follow(auth.user_id, user_id).await?;
    Ok(Created(ApiJson(OperationResponse::ok())))
}

/// Unfollow a user
///
/// DELETE /api/users/{user_id}/follow
pub async fn remove_follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<ApiJson<OperationResponse>> {
    let service = FollowService::new(state.service_context());
    service.remove_follow(auth.user_id, user_id).await?;
    Ok(ApiJson(OperationResponse::ok()))
}
