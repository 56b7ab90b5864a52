//! # chirp-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate handles:
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository traits and their PostgreSQL implementations
//!
//! Repository methods borrow an active [`sqlx::PgConnection`] instead of
//! holding a pool, so the caller decides the transaction scope: a service
//! opens one transaction per request, runs every guard and mutation on it,
//! and commits (or drops, rolling back) at the end.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chirp_db::pool::{create_pool, DatabaseConfig};
//! use chirp_db::repositories::{PgTweetRepository, TweetRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     chirp_db::run_migrations(&pool).await?;
//!
//!     let repo = PgTweetRepository;
//!     let mut tx = pool.begin().await?;
//!     let id = repo.create(&mut tx, "hello", &[], 1).await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    map_db_error, FollowRepository, LikeRepository, MediaRepository, PgFollowRepository,
    PgLikeRepository, PgMediaRepository, PgTweetRepository, PgUserRepository, RepoResult,
    TweetRepository, UserRepository,
};
