//! Media service
//!
//! Stores uploaded attachment files and registers their metadata rows.

use tracing::{info, instrument};
use uuid::Uuid;

use chirp_core::entities::Media;
use chirp_core::error::DomainError;
use chirp_db::map_db_error;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an uploaded file and register a media row, returning its id.
    ///
    /// The file is written under a generated unique name so uploads can
    /// never collide or traverse outside the upload directory; the stored
    /// `file_path` is the public URL path the static host serves it from.
    #[instrument(skip(self, data))]
    pub async fn upload(&self, filename: &str, data: &[u8]) -> ServiceResult<i64> {
        if !Media::has_allowed_extension(filename) {
            return Err(DomainError::InvalidFileType(filename.to_string()).into());
        }

        // Extension presence was just validated
        let (_, extension) = filename
            .rsplit_once('.')
            .ok_or_else(|| DomainError::InvalidFileType(filename.to_string()))?;
        let unique_name = format!("{}.{extension}", Uuid::new_v4());

        let upload_dir = self.ctx.storage().upload_dir();
        tokio::fs::create_dir_all(&upload_dir)
            .await
            .map_err(|e| ServiceError::internal(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(upload_dir.join(&unique_name), data)
            .await
            .map_err(|e| ServiceError::internal(format!("Failed to store upload: {e}")))?;

        let public_path = self.ctx.storage().public_path(&unique_name);

        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;
        let media_id = self.ctx.media_repo().create(&mut tx, &public_path).await?;
        tx.commit().await.map_err(map_db_error)?;

        info!(media_id, filename, "Media uploaded");

        Ok(media_id)
    }
}
