//! Tweet database models

use sqlx::FromRow;

/// Database model for the tweets table
#[derive(Debug, Clone, FromRow)]
pub struct TweetModel {
    pub id: i64,
    pub body: String,
    pub media_ids: Vec<i64>,
    pub author_id: i64,
}

/// Tweet row joined with its author's id and name (feed query)
#[derive(Debug, Clone, FromRow)]
pub struct TweetWithAuthorModel {
    pub id: i64,
    pub body: String,
    pub media_ids: Vec<i64>,
    pub author_id: i64,
    pub author_name: String,
}
