//! User database models

use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub secret_key: String,
}

/// Projection of a user without the secret key (from joined queries)
#[derive(Debug, Clone, FromRow)]
pub struct UserRefModel {
    pub id: i64,
    pub name: String,
}
