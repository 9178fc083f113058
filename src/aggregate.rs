use crate::models::rating::Rating;
use crate::models::review::Review;

/// Count and mean over the whole store, regardless of filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregate {
    NoRatings,
    Rated {
        count: usize,
        /// Mean rounded to one decimal place.
        mean_1dp: f64,
        /// Mean rounded to the nearest whole rating, halves away from zero.
        mean_int: Rating,
    },
}

pub fn aggregate(records: &[Review]) -> Aggregate {
    if records.is_empty() {
        return Aggregate::NoRatings;
    }

    let total: u32 = records.iter().map(|r| u32::from(r.rating.value())).sum();
    let mean = f64::from(total) / records.len() as f64;

    Aggregate::Rated {
        count: records.len(),
        mean_1dp: (mean * 10.0).round() / 10.0,
        mean_int: Rating::nearest(mean),
    }
}
