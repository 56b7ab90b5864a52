//! Database models - SQLx-compatible structs for PostgreSQL tables

mod follow;
mod like;
mod media;
mod tweet;
mod user;

pub use follow::FollowModel;
pub use like::{LikeModel, LikeWithUserModel};
pub use media::MediaModel;
pub use tweet::{TweetModel, TweetWithAuthorModel};
pub use user::{UserModel, UserRefModel};
