//! Like entity - a user's like on a tweet

use crate::entities::UserRef;

/// Like entity, unique per (user, tweet) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: i64,
    pub user_id: i64,
    pub tweet_id: i64,
}

impl Like {
    /// Create a new Like
    pub fn new(id: i64, user_id: i64, tweet_id: i64) -> Self {
        Self {
            id,
            user_id,
            tweet_id,
        }
    }
}

/// A like eagerly joined with its liking user's public view.
///
/// The feed query loads these in bulk for all candidate tweets at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeWithUser {
    pub tweet_id: i64,
    pub user: UserRef,
}
