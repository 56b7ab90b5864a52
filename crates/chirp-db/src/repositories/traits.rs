//! Repository traits
//!
//! Methods take `&mut PgConnection` so the caller owns the transaction
//! scope: a service begins one transaction per request and threads it
//! through every guard and mutation.

use async_trait::async_trait;
use sqlx::PgConnection;

use chirp_core::entities::{
    FollowEdge, Like, LikeWithUser, Media, TweetWithAuthor, TweetWithLikes, User, UserRef,
};
use chirp_core::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// User lookups (no mutation: accounts are created at seed time)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, conn: &mut PgConnection, id: i64) -> RepoResult<Option<User>>;

    /// Find a user by their static API secret key
    async fn find_by_secret_key(
        &self,
        conn: &mut PgConnection,
        secret_key: &str,
    ) -> RepoResult<Option<User>>;

    /// Check whether a user id exists
    async fn exists(&self, conn: &mut PgConnection, id: i64) -> RepoResult<bool>;
}

/// Tweet persistence and feed reads
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Find a tweet with its likes eagerly included, so authorship and
    /// duplicate-like guards need no second query
    async fn find_with_likes(
        &self,
        conn: &mut PgConnection,
        id: i64,
    ) -> RepoResult<Option<TweetWithLikes>>;

    /// Insert a tweet, returning the generated id
    async fn create(
        &self,
        conn: &mut PgConnection,
        body: &str,
        media_ids: &[i64],
        author_id: i64,
    ) -> RepoResult<i64>;

    /// Delete a tweet; its likes cascade at the store layer
    async fn delete(&self, conn: &mut PgConnection, id: i64) -> RepoResult<()>;

    /// Bulk fetch of all tweets by any of the given authors, each joined
    /// with its author's id and name, ordered by tweet id
    async fn find_by_authors(
        &self,
        conn: &mut PgConnection,
        author_ids: &[i64],
    ) -> RepoResult<Vec<TweetWithAuthor>>;
}

/// Like persistence
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find the like of a (tweet, user) pair, if any
    async fn find(
        &self,
        conn: &mut PgConnection,
        tweet_id: i64,
        user_id: i64,
    ) -> RepoResult<Option<Like>>;

    /// Insert a like, returning the generated id.
    ///
    /// The (user, tweet) unique constraint backs the duplicate guard:
    /// a violation surfaces as `DomainError::LikeAlreadyExists`.
    async fn create(&self, conn: &mut PgConnection, tweet_id: i64, user_id: i64) -> RepoResult<i64>;

    /// Delete a like by id
    async fn delete(&self, conn: &mut PgConnection, id: i64) -> RepoResult<()>;

    /// Bulk fetch of all likes on any of the given tweets, each joined
    /// with the liking user's id and name, ordered by like id
    async fn find_for_tweets(
        &self,
        conn: &mut PgConnection,
        tweet_ids: &[i64],
    ) -> RepoResult<Vec<LikeWithUser>>;
}

/// Follow-graph queries and persistence
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Find the edge (follower, followed), if any
    async fn find(
        &self,
        conn: &mut PgConnection,
        follower_id: i64,
        followed_id: i64,
    ) -> RepoResult<Option<FollowEdge>>;

    /// Ids of all users the given user follows (one hop)
    async fn followed_ids(&self, conn: &mut PgConnection, follower_id: i64) -> RepoResult<Vec<i64>>;

    /// All users whose outgoing edge targets the given user, with names
    /// joined in the same query (one query per direction, never per edge)
    async fn followers_of(&self, conn: &mut PgConnection, user_id: i64) -> RepoResult<Vec<UserRef>>;

    /// All users the given user's outgoing edges target, names joined
    async fn following_of(&self, conn: &mut PgConnection, user_id: i64) -> RepoResult<Vec<UserRef>>;

    /// Insert an edge.
    ///
    /// The composite primary key backs the duplicate guard: a violation
    /// surfaces as `DomainError::FollowAlreadyExists`.
    async fn create(
        &self,
        conn: &mut PgConnection,
        follower_id: i64,
        followed_id: i64,
    ) -> RepoResult<()>;

    /// Delete the edge (follower, followed)
    async fn delete(
        &self,
        conn: &mut PgConnection,
        follower_id: i64,
        followed_id: i64,
    ) -> RepoResult<()>;
}

/// Media metadata persistence
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Insert a media row, returning the generated id
    async fn create(&self, conn: &mut PgConnection, file_path: &str) -> RepoResult<i64>;

    /// Bulk fetch of all media rows, for the feed's in-memory id→path map
    async fn find_all(&self, conn: &mut PgConnection) -> RepoResult<Vec<Media>>;
}
