//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Tweet not found: {0}")]
    TweetNotFound(i64),

    #[error("Like not found")]
    LikeNotFound,

    #[error("Follow not found")]
    FollowNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("A user can't follow himself")]
    SelfFollow,

    #[error("Tweet body too long: max {max} characters")]
    TweetTooLong { max: usize },

    #[error("Tweet body must not be empty")]
    EmptyTweet,

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Like already exists")]
    LikeAlreadyExists,

    #[error("Follow already exists")]
    FollowAlreadyExists,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the author of this tweet")]
    NotTweetAuthor,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::TweetNotFound(_) => "TWEET_NOT_FOUND",
            Self::LikeNotFound => "LIKE_NOT_FOUND",
            Self::FollowNotFound => "FOLLOW_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::SelfFollow => "SELF_FOLLOW",
            Self::TweetTooLong { .. } => "TWEET_TOO_LONG",
            Self::EmptyTweet => "EMPTY_TWEET",
            Self::InvalidFileType(_) => "INVALID_FILE_TYPE",

            // Conflict
            Self::LikeAlreadyExists => "LIKE_ALREADY_EXISTS",
            Self::FollowAlreadyExists => "FOLLOW_ALREADY_EXISTS",

            // Authorization
            Self::NotTweetAuthor => "NOT_TWEET_AUTHOR",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::TweetNotFound(_) | Self::LikeNotFound | Self::FollowNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::SelfFollow
                | Self::TweetTooLong { .. }
                | Self::EmptyTweet
                | Self::InvalidFileType(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::LikeAlreadyExists | Self::FollowAlreadyExists)
    }

    /// Check if this is an authorization error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::NotTweetAuthor)
    }
}
