use crate::models::review::ReviewId;
use thiserror::Error;

/// Reasons a submission is turned away. Nothing is stored when one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a rating.")]
    RatingRequired,
    #[error("Rating {0} is outside 1 to 5.")]
    RatingOutOfRange(u8),
    #[error("Please provide a comment.")]
    CommentRequired,
    #[error("A review with id {0} already exists.")]
    DuplicateId(ReviewId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// A persisted payload that cannot be trusted. Loading treats it as empty.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed reviews payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("review {0} has an empty comment")]
    EmptyComment(ReviewId),
    #[error("review id {0} appears more than once")]
    DuplicateId(ReviewId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Json(#[from] serde_json::Error),
}
