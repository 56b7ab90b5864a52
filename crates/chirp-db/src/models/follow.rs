//! Follow database model

use sqlx::FromRow;

/// Database model for the follows table
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub follower_id: i64,
    pub followed_id: i64,
}
