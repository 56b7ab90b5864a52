//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;

use chirp_core::entities::User;

use crate::models::UserModel;

use super::error::map_db_error;
use super::traits::{RepoResult, UserRepository};

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct PgUserRepository;

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, conn))]
    async fn find_by_id(&self, conn: &mut PgConnection, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, secret_key
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, conn, secret_key))]
    async fn find_by_secret_key(
        &self,
        conn: &mut PgConnection,
        secret_key: &str,
    ) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, secret_key
            FROM users
            WHERE secret_key = $1
            ",
        )
        .bind(secret_key)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, conn))]
    async fn exists(&self, conn: &mut PgConnection, id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
            ",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
