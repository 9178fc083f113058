// src/models/review.rs
use crate::models::rating::Rating;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Creation-time identifier, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,               // Unique, assigned by the store
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,               // Reviewer name, may be empty
    pub rating: Rating,             // 1 to 5
    pub comment: String,            // Never empty
    pub timestamp: DateTime<Utc>,   // Creation instant, ISO-8601 on disk
}

// Older saves may omit the name or store it as null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A candidate review handed to the store. The rating is still raw input;
/// `id` and `timestamp` are filled in by the store when absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub id: Option<ReviewId>,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl ReviewDraft {
    pub fn new(name: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            comment: comment.into(),
            ..Self::default()
        }
    }
}
