//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Create tweet request
///
/// `tweet_media_ids` are ids previously returned by the media upload
/// endpoint; order is preserved in the rendered attachment list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTweetRequest {
    #[validate(length(min = 1, max = 280, message = "Tweet body must be 1-280 characters"))]
    pub tweet_data: String,

    #[serde(default)]
    pub tweet_media_ids: Vec<i64>,
}
