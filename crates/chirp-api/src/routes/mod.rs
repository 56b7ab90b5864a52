//! Route definitions
//!
//! All API routes mounted under /api, mirroring the public surface:
//! tweets, likes, follows, profiles, and media upload.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{follows, health, likes, medias, tweets, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately so probes bypass the API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(tweet_routes())
        .merge(user_routes())
        .merge(media_routes())
}

/// Tweet, feed, and like routes
fn tweet_routes() -> Router<AppState> {
    Router::new()
        .route("/tweets", post(tweets::create_tweet))
        .route("/tweets", get(tweets::get_feed))
        .route("/tweets/:tweet_id", delete(tweets::delete_tweet))
        .route("/tweets/:tweet_id/likes", post(likes::add_like))
        .route("/tweets/:tweet_id/likes", delete(likes::remove_like))
}

/// Profile and follow routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::get_own_profile))
        .route("/users/:user_id", get(users::get_user_profile))
        .route("/users/:user_id/follow", post(follows::add_follow))
        .route("/users/:user_id/follow", delete(follows::remove_follow))
}

/// Media upload routes
fn media_routes() -> Router<AppState> {
    Router::new().route("/medias", post(medias::upload_media))
}
