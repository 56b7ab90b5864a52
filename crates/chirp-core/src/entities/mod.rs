//! Domain entities and denormalized read views

mod follow;
mod like;
mod media;
mod tweet;
mod user;

pub use follow::FollowEdge;
pub use like::{Like, LikeWithUser};
pub use media::Media;
pub use tweet::{Tweet, TweetWithAuthor, TweetWithLikes, MAX_TWEET_LENGTH};
pub use user::{User, UserRef};
