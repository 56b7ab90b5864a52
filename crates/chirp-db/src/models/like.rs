//! Like database models

use sqlx::FromRow;

/// Database model for the likes table
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub id: i64,
    pub user_id: i64,
    pub tweet_id: i64,
}

/// Like row joined with the liking user's id and name (feed query)
#[derive(Debug, Clone, FromRow)]
pub struct LikeWithUserModel {
    pub tweet_id: i64,
    pub user_id: i64,
    pub user_name: String,
}
