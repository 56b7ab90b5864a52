//! Tweet handlers
//!
//! Endpoints for creating and deleting tweets and fetching the feed.

use axum::extract::{Path, State};

use chirp_service::{
    CreateTweetRequest, FeedResponse, FeedService, OperationResponse, TweetCreatedResponse,
    TweetService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Create a new tweet
///
/// POST /api/tweets
pub async fn create_tweet(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTweetRequest>,
) -> ApiResult<Created<ApiJson<TweetCreatedResponse>>> {
    let service = TweetService::new(state.service_context());
    let id = service.create_tweet(auth.user_id, &request).await?;
    Ok(Created(ApiJson(TweetCreatedResponse::new(id))))
}

/// Delete an own tweet
///
/// DELETE /api/tweets/{tweet_id}
pub async fn delete_tweet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tweet_id): Path<i64>,
) -> ApiResult<ApiJson<OperationResponse>> {
    let service = TweetService::new(state.service_context());
    service.delete_tweet(auth.user_id, tweet_id).await?;
    Ok(ApiJson(OperationResponse::ok()))
}

/// Fetch the ranked feed of tweets from followed users
///
/// GET /api/tweets
pub async fn get_feed(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<FeedResponse>> {
    let service = FeedService::new(state.service_context());
    let feed = service.build_feed(auth.user_id).await?;
    Ok(ApiJson(feed))
}
