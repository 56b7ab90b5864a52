//! Authentication extractor
//!
//! Resolves the static `api-key` header to a user id before any handler
//! logic runs. The core services only ever see the resulting plain
//! `user_id`; they never touch the header or the key.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the static API secret key
pub const API_KEY_HEADER: &str = "api-key";

/// Authenticated user resolved from the api-key header
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// Id of the authenticated user
    pub user_id: i64,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let api_key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::MissingApiKey)?;

        let app_state = AppState::from_ref(state);
        let ctx = app_state.service_context();

        let mut conn = ctx
            .pool()
            .acquire()
            .await
            .map_err(ApiError::internal)?;

        let user = ctx
            .user_repo()
            .find_by_secret_key(&mut conn, api_key)
            .await
            .map_err(ApiError::Domain)?
            .ok_or_else(|| {
                tracing::warn!("Unknown API key presented");
                ApiError::InvalidApiKey
            })?;

        Ok(AuthUser::new(user.id))
    }
}
