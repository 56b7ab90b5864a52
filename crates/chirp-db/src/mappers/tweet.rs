//! Tweet entity <-> model mapper

use chirp_core::entities::{Tweet, TweetWithAuthor, UserRef};

use crate::models::{TweetModel, TweetWithAuthorModel};

impl From<TweetModel> for Tweet {
    fn from(model: TweetModel) -> Self {
        Tweet {
            id: model.id,
            body: model.body,
            media_ids: model.media_ids,
            author_id: model.author_id,
        }
    }
}

impl From<TweetWithAuthorModel> for TweetWithAuthor {
    fn from(model: TweetWithAuthorModel) -> Self {
        TweetWithAuthor {
            author: UserRef::new(model.author_id, model.author_name),
            tweet: Tweet {
                id: model.id,
                body: model.body,
                media_ids: model.media_ids,
                author_id: model.author_id,
            },
        }
    }
}
