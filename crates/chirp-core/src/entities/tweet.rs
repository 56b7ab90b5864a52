//! Tweet entity - a short text message with optional media attachments

use crate::entities::{Like, UserRef};

/// Maximum tweet body length in Unicode code points
pub const MAX_TWEET_LENGTH: usize = 280;

/// Tweet entity
///
/// `media_ids` is an ordered list of media row ids; the ids are not
/// foreign-key enforced, so an id with no matching media row simply
/// renders as an absent attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub id: i64,
    pub body: String,
    pub media_ids: Vec<i64>,
    pub author_id: i64,
}

impl Tweet {
    /// Create a new Tweet
    pub fn new(id: i64, body: String, media_ids: Vec<i64>, author_id: i64) -> Self {
        Self {
            id,
            body,
            media_ids,
            author_id,
        }
    }

    /// Check whether the given user authored this tweet
    #[inline]
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }

    /// Body length in code points, the unit the 280 limit is defined in
    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }
}

/// A tweet eagerly joined with its author's public view.
///
/// Produced by the feed query in one round trip; the author name is never
/// fetched per-tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetWithAuthor {
    pub tweet: Tweet,
    pub author: UserRef,
}

/// A tweet eagerly joined with its likes.
///
/// The read-before-write guards load this shape so authorship and
/// duplicate-like checks need no second query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetWithLikes {
    pub tweet: Tweet,
    pub likes: Vec<Like>,
}

impl TweetWithLikes {
    /// Number of likes on this tweet
    #[inline]
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Check whether the given user already liked this tweet
    pub fn has_like_from(&self, user_id: i64) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }
}
