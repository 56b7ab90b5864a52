//! Feed service
//!
//! Assembles the popularity-ranked feed of tweets from followed users.
//!
//! The pipeline is fetch-then-rank-then-render: three bulk queries load
//! everything the feed needs (tweets joined with authors, likes joined
//! with likers, the media table), then ranking and denormalization happen
//! in-process. Ranking is not a database ORDER BY because the rank key
//! (like count) is derived from the already-loaded likes association.

use std::collections::HashMap;

use tracing::instrument;

use chirp_core::entities::{LikeWithUser, Media, TweetWithAuthor};
use chirp_db::map_db_error;

use crate::dto::{FeedResponse, LikeView, TweetView, UserView};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the ranked feed for a user.
    ///
    /// A user who follows nobody gets an empty feed, not an error.
    #[instrument(skip(self))]
    pub async fn build_feed(&self, user_id: i64) -> ServiceResult<FeedResponse> {
        let mut tx = self.ctx.pool().begin().await.map_err(map_db_error)?;

        let followed = self
            .ctx
            .follow_repo()
            .followed_ids(&mut tx, user_id)
            .await?;

        if followed.is_empty() {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(FeedResponse::new(Vec::new()));
        }

        let tweets = self
            .ctx
            .tweet_repo()
            .find_by_authors(&mut tx, &followed)
            .await?;

        let tweet_ids: Vec<i64> = tweets.iter().map(|t| t.tweet.id).collect();
        let likes = self
            .ctx
            .like_repo()
            .find_for_tweets(&mut tx, &tweet_ids)
            .await?;

        let media = self.ctx.media_repo().find_all(&mut tx).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(FeedResponse::new(assemble_feed(tweets, likes, media)))
    }
}

/// Rank and denormalize eagerly fetched feed data.
///
/// Tweets are sorted by descending like count; the sort is stable, so ties
/// keep the fetch order (ascending tweet id) and the result is
/// deterministic per input. Media ids with no matching row are skipped,
/// preserving the order of the ones that resolve.
fn assemble_feed(
    tweets: Vec<TweetWithAuthor>,
    likes: Vec<LikeWithUser>,
    media: Vec<Media>,
) -> Vec<TweetView> {
    let media_paths: HashMap<i64, String> =
        media.into_iter().map(|m| (m.id, m.file_path)).collect();

    let mut likes_by_tweet: HashMap<i64, Vec<LikeView>> = HashMap::new();
    for like in likes {
        likes_by_tweet
            .entry(like.tweet_id)
            .or_default()
            .push(LikeView::from(like));
    }

    let mut tweets = tweets;
    tweets.sort_by_key(|t| {
        std::cmp::Reverse(likes_by_tweet.get(&t.tweet.id).map_or(0, Vec::len))
    });

    tweets
        .into_iter()
        .map(|entry| {
            let TweetWithAuthor { tweet, author } = entry;
            let attachments = tweet
                .media_ids
                .iter()
                .filter_map(|id| media_paths.get(id).cloned())
                .collect();

            TweetView {
                id: tweet.id,
                content: tweet.body,
                attachments,
                author: UserView::from(author),
                likes: likes_by_tweet.remove(&tweet.id).unwrap_or_default(),
            }
        })
        .collect()
}
