//! Like handlers
//!
//! Endpoints for liking and unliking tweets.

use axum::extract::{Path, State};

use chirp_service::{LikeService, OperationResponse};

use crate::extractors::AuthUser;
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Like a tweet
///
/// POST /api/tweets/{tweet_id}/likes
pub async fn add_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tweet_id): Path<i64>,
) -> ApiResult<Created<ApiJson<OperationResponse>>> {
    let service = LikeService::new(state.service_context());
    service.add_like(auth.user_id, tweet_id).await?;
    Ok(Created(ApiJson(OperationResponse::ok())))
}

/// Remove an own like from a tweet
///
/// DELETE /api/tweets/{tweet_id}/likes
pub async fn remove_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tweet_id): Path<i64>,
) -> ApiResult<ApiJson<OperationResponse>> {
    let service = LikeService::new(state.service_context());
    service.remove_like(auth.user_id, tweet_id).await?;
    Ok(ApiJson(OperationResponse::ok()))
}
