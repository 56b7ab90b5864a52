//! Follow edge entity - a directed follower relationship

/// Directed follow edge: the follower receives the followed user's tweets
/// in their feed. "A follows B" does not imply "B follows A".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowEdge {
    pub follower_id: i64,
    pub followed_id: i64,
}

impl FollowEdge {
    /// Create a new FollowEdge
    pub fn new(follower_id: i64, followed_id: i64) -> Self {
        Self {
            follower_id,
            followed_id,
        }
    }

    /// A user may not follow themself
    #[inline]
    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.followed_id
    }
}
