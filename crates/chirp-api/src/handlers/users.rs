//! User profile handlers

use axum::extract::{Path, State};

use chirp_service::{ProfileResponse, ProfileService};

use crate::extractors::AuthUser;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Get the authenticated user's own profile
///
/// GET /api/users/me
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.build_profile(auth.user_id).await?;
    Ok(ApiJson(profile))
}

/// Get any user's profile by id
///
/// GET /api/users/{user_id}
pub async fn get_user_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<ApiJson<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.build_profile(user_id).await?;
    Ok(ApiJson(profile))
}
