//! Request and response DTOs

mod requests;
mod responses;

pub use requests::CreateTweetRequest;
pub use responses::{
    FeedResponse, LikeView, MediaCreatedResponse, OperationResponse, ProfileResponse,
    TweetCreatedResponse, TweetView, UserView,
};
