//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use chirp_common::{AppConfig, AppError};
use chirp_db::{
    create_pool, run_migrations, PgFollowRepository, PgLikeRepository, PgMediaRepository,
    PgTweetRepository, PgUserRepository,
};
use chirp_service::ServiceContext;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let upload_limit = usize::try_from(config.storage.max_file_size_mb)
        .unwrap_or(10)
        .saturating_mul(1024 * 1024);

    let router = create_router()
        .layer(DefaultBodyLimit::max(upload_limit));
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    router
        .merge(health_routes())
        .nest_service("/static", ServeDir::new(&config.storage.static_dir))
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = chirp_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create schema and seed data if this is a fresh database
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Build service context with repositories
    let service_context = ServiceContext::new(
        pool,
        Arc::new(PgUserRepository::new()),
        Arc::new(PgTweetRepository::new()),
        Arc::new(PgLikeRepository::new()),
        Arc::new(PgFollowRepository::new()),
        Arc::new(PgMediaRepository::new()),
        config.storage.clone(),
    );

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until shutdown is requested
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;
    let pool = state.service_context().pool().clone();

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await?;

    // Close the store handle before exiting
    info!("Closing database pool");
    pool.close().await;

    Ok(())
}

/// Resolve when SIGINT (or SIGTERM on unix) is received
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
