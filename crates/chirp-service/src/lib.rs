//! # chirp-service
//!
//! Application layer: request/response DTOs and the services implementing
//! feed assembly, profile assembly, and the mutating tweet/like/follow/media
//! operations. Every mutating operation runs its read-before-write guards
//! and its mutation inside a single transaction.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateTweetRequest, FeedResponse, LikeView, MediaCreatedResponse, OperationResponse,
    ProfileResponse, TweetCreatedResponse, TweetView, UserView,
};
pub use services::{
    FeedService, FollowService, LikeService, MediaService, ProfileService, ServiceContext,
    ServiceError, ServiceResult, TweetService,
};
