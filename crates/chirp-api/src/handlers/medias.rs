//! Media upload handler

use axum::extract::{Multipart, State};

use chirp_service::{MediaCreatedResponse, MediaService};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Upload an attachment file (multipart form, field name `file`)
///
/// POST /api/medias
pub async fn upload_media(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Created<ApiJson<MediaCreatedResponse>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| ApiError::invalid_body("Uploaded file has no filename"))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?;

        let service = MediaService::new(state.service_context());
        let media_id = service.upload(&filename, &data).await?;
        return Ok(Created(ApiJson(MediaCreatedResponse::new(media_id))));
    }

    Err(ApiError::invalid_body("Missing multipart field: file"))
}
