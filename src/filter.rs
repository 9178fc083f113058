//! Search and minimum-rating narrowing over the review list.
use crate::models::rating::Rating;
use crate::models::review::Review;

/// The rating-filter select: `"all"` or a threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MinRating {
    #[default]
    All,
    AtLeast(Rating),
}

impl MinRating {
    /// Parses a select value. Anything other than `"1"`..`"5"` means all.
    pub fn parse(value: &str) -> Self {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Rating::new)
            .map_or(MinRating::All, MinRating::AtLeast)
    }

    pub fn as_value(self) -> String {
        match self {
            MinRating::All => "all".to_string(),
            MinRating::AtLeast(rating) => rating.to_string(),
        }
    }

    pub fn admits(self, rating: Rating) -> bool {
        match self {
            MinRating::All => true,
            MinRating::AtLeast(min) => rating >= min,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub min_rating: MinRating,
}

impl FilterCriteria {
    pub fn apply<'a>(&self, records: &'a [Review]) -> Vec<&'a Review> {
        filter(records, &self.search_term, self.min_rating)
    }
}

/// Keeps records whose name or comment contains `search_term`
/// (case-insensitive) and whose rating passes `min_rating`. Order is kept.
pub fn filter<'a, I>(records: I, search_term: &str, min_rating: MinRating) -> Vec<&'a Review>
where
    I: IntoIterator<Item = &'a Review>,
{
    let term = search_term.to_lowercase();
    records
        .into_iter()
        .filter(|review| {
            term.is_empty()
                || review.name.to_lowercase().contains(&term)
                || review.comment.to_lowercase().contains(&term)
        })
        .filter(|review| min_rating.admits(review.rating))
        .collect()
}
