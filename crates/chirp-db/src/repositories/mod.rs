//! Repository traits and their PostgreSQL implementations
//!
//! Each trait documents exactly which associations its read methods join
//! eagerly; the implementations keep that contract with bulk queries, never
//! per-item round trips. All methods borrow the caller's connection so one
//! transaction can span every access a request makes.

mod error;
mod follow;
mod like;
mod media;
mod traits;
mod tweet;
mod user;

pub use error::{map_db_error, map_unique_violation};
pub use follow::PgFollowRepository;
pub use like::PgLikeRepository;
pub use media::PgMediaRepository;
pub use traits::{
    FollowRepository, LikeRepository, MediaRepository, RepoResult, TweetRepository, UserRepository,
};
pub use tweet::PgTweetRepository;
pub use user::PgUserRepository;
