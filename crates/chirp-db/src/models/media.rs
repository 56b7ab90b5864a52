//! Media database model

use sqlx::FromRow;

/// Database model for the media table
#[derive(Debug, Clone, FromRow)]
pub struct MediaModel {
    pub id: i64,
    pub file_path: String,
}
