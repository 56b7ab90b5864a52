//! Service layer
//!
//! Business logic for the feed, profiles, and the mutating tweet, like,
//! follow, and media operations. Services borrow a [`ServiceContext`] and
//! open one transaction per operation.

mod context;
mod error;
mod feed;
mod follow;
mod like;
mod media;
mod profile;
mod tweet;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use follow::FollowService;
pub use like::LikeService;
pub use media::MediaService;
pub use profile::ProfileService;
pub use tweet::TweetService;
