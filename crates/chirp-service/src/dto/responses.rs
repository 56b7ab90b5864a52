//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Successful
//! operations carry `result: true`; error responses are produced by the
//! API layer from the typed errors instead.

use serde::Serialize;

use chirp_core::entities::{LikeWithUser, UserRef};

/// Generic operation result
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    pub result: bool,
}

impl OperationResponse {
    /// Successful operation
    pub fn ok() -> Self {
        Self { result: true }
    }
}

/// Result of creating a tweet, with the new id
#[derive(Debug, Serialize)]
pub struct TweetCreatedResponse {
    pub result: bool,
    pub id: i64,
}

impl TweetCreatedResponse {
    pub fn new(id: i64) -> Self {
        Self { result: true, id }
    }
}

/// Result of uploading a media file, with the new id
#[derive(Debug, Serialize)]
pub struct MediaCreatedResponse {
    pub result: bool,
    pub media_id: i64,
}

impl MediaCreatedResponse {
    pub fn new(media_id: i64) -> Self {
        Self {
            result: true,
            media_id,
        }
    }
}

/// Public user view: id plus display name
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
}

impl From<UserRef> for UserView {
    fn from(user: UserRef) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// A like as rendered inside a feed item
#[derive(Debug, Clone, Serialize)]
pub struct LikeView {
    pub user_id: i64,
    pub name: String,
}

impl From<LikeWithUser> for LikeView {
    fn from(like: LikeWithUser) -> Self {
        Self {
            user_id: like.user.id,
            name: like.user.name,
        }
    }
}

/// A fully denormalized feed item
#[derive(Debug, Clone, Serialize)]
pub struct TweetView {
    pub id: i64,
    pub content: String,
    pub attachments: Vec<String>,
    pub author: UserView,
    pub likes: Vec<LikeView>,
}

/// The ranked feed of a user
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub result: bool,
    pub tweets: Vec<TweetView>,
}

impl FeedResponse {
    pub fn new(tweets: Vec<TweetView>) -> Self {
        Self {
            result: true,
            tweets,
        }
    }
}

/// A user profile with both directions of the follow graph flattened
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub result: bool,
    pub user: UserView,
    pub followers: Vec<UserView>,
    pub following: Vec<UserView>,
}

impl ProfileResponse {
    pub fn new(user: UserView, followers: Vec<UserView>, following: Vec<UserView>) -> Self {
        Self {
            result: true,
            user,
            followers,
            following,
        }
    }
}
