//! PostgreSQL implementation of MediaRepository

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::instrument;

use chirp_core::entities::Media;

use crate::models::MediaModel;

use super::error::map_db_error;
use super::traits::{MediaRepository, RepoResult};

/// PostgreSQL implementation of MediaRepository
#[derive(Debug, Clone, Copy, Default)]
pub struct PgMediaRepository;

impl PgMediaRepository {
    /// Create a new PgMediaRepository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MediaRepository for PgMediaRepository {
    #[instrument(skip(self, conn, file_path))]
    async fn create(&self, conn: &mut PgConnection, file_path: &str) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO media (file_path)
            VALUES ($1)
            RETURNING id
            ",
        )
        .bind(file_path)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, conn))]
    async fn find_all(&self, conn: &mut PgConnection) -> RepoResult<Vec<Media>> {
        let results = sqlx::query_as::<_, MediaModel>(
            r"
            SELECT id, file_path
            FROM media
            ",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Media::from).collect())
    }
}
