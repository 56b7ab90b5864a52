//! # chirp-core
//!
//! Domain layer containing entities, read views, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;

// Re-export commonly used types at crate root
pub use entities::{
    FollowEdge, Like, LikeWithUser, Media, Tweet, TweetWithAuthor, TweetWithLikes, User, UserRef,
    MAX_TWEET_LENGTH,
};
pub use error::DomainError;
