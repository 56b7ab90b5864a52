//! Service context - dependency container for services
//!
//! Holds the connection pool, the repositories, and the storage settings
//! the services depend on. Constructed once at startup and shared.

use std::sync::Arc;

use chirp_common::StorageConfig;
use chirp_db::{
    FollowRepository, LikeRepository, MediaRepository, PgPool, TweetRepository, UserRepository,
};

/// Service context containing all dependencies
///
/// The pool is handed out so each service can open its own transaction;
/// repositories run on whatever connection the service passes in.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    user_repo: Arc<dyn UserRepository>,
    tweet_repo: Arc<dyn TweetRepository>,
    like_repo: Arc<dyn LikeRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    media_repo: Arc<dyn MediaRepository>,

    storage: StorageConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        tweet_repo: Arc<dyn TweetRepository>,
        like_repo: Arc<dyn LikeRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        media_repo: Arc<dyn MediaRepository>,
        storage: StorageConfig,
    ) -> Self {
        Self {
            pool,
            user_repo,
            tweet_repo,
            like_repo,
            follow_repo,
            media_repo,
            storage,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the tweet repository
    pub fn tweet_repo(&self) -> &dyn TweetRepository {
        self.tweet_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the media repository
    pub fn media_repo(&self) -> &dyn MediaRepository {
        self.media_repo.as_ref()
    }

    /// Get the file storage settings
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("storage", &self.storage)
            .finish()
    }
}
