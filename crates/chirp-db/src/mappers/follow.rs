//! Follow entity <-> model mapper

use chirp_core::entities::FollowEdge;

use crate::models::FollowModel;

impl From<FollowModel> for FollowEdge {
    fn from(model: FollowModel) -> Self {
        FollowEdge {
            follower_id: model.follower_id,
            followed_id: model.followed_id,
        }
    }
}
