// src/models/rating.rs
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emoji and label for each rating, indexed by `value - 1`.
const EMOJI_TABLE: [(&str, &str); 5] = [
    ("😠", "Terrible"),
    ("🙁", "Bad"),
    ("😐", "Okay"),
    ("🙂", "Good"),
    ("😄", "Excellent"),
];

/// A review rating in `1..=5`. Cannot hold any other value, so a stored
/// record with a `Rating` always satisfies the rating invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Every selectable rating, lowest first.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    pub fn new(value: u8) -> Option<Self> {
        (1..=5).contains(&value).then_some(Rating(value))
    }

    /// Rounds a mean to the closest rating. Halves round away from zero,
    /// so 2.5 becomes 3.
    pub fn nearest(mean: f64) -> Self {
        Rating(mean.round().clamp(1.0, 5.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn emoji(self) -> &'static str {
        EMOJI_TABLE[usize::from(self.0 - 1)].0
    }

    pub fn label(self) -> &'static str {
        EMOJI_TABLE[usize::from(self.0 - 1)].1
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Err(ValidationError::RatingRequired),
            v => Rating::new(v).ok_or(ValidationError::RatingOutOfRange(v)),
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
