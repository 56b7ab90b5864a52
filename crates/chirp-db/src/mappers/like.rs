//! Like entity <-> model mapper

use chirp_core::entities::{Like, LikeWithUser, UserRef};

use crate::models::{LikeModel, LikeWithUserModel};

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            id: model.id,
            user_id: model.user_id,
            tweet_id: model.tweet_id,
        }
    }
}

impl From<LikeWithUserModel> for LikeWithUser {
    fn from(model: LikeWithUserModel) -> Self {
        LikeWithUser {
            tweet_id: model.tweet_id,
            user: UserRef::new(model.user_id, model.user_name),
        }
    }
}
