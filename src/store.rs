use crate::error::{PayloadError, ValidationError};
use crate::models::rating::Rating;
use crate::models::review::{Review, ReviewDraft, ReviewId};
use crate::storage::KeyValueSlot;
use chrono::{DateTime, Utc};
use leptos::logging::{error, log, warn};
use std::collections::HashSet;

/// Whole-value writes are attempted this many times before giving up.
const WRITE_ATTEMPTS: usize = 2;

/// Result of a successful insert. `persisted` is false when the slot refused
/// the write; the review is still held in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserted {
    pub id: ReviewId,
    pub persisted: bool,
}

/// Owns every review, newest first, and mirrors them into one slot key.
pub struct ReviewStore<S> {
    slot: S,
    key: String,
    reviews: Vec<Review>,
    dirty: bool,
}

impl<S: KeyValueSlot> ReviewStore<S> {
    /// Reads the slot once. Missing or untrustworthy data gives an empty
    /// store; this never fails.
    pub fn load(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let reviews = match slot.read(&key) {
            Ok(Some(payload)) => match decode(&payload) {
                Ok(reviews) => {
                    log!("[STORE] Loaded {} reviews from '{}'", reviews.len(), key);
                    reviews
                }
                Err(err) => {
                    warn!("[STORE] Ignoring stored reviews in '{}': {}", key, err);
                    Vec::new()
                }
            },
            Ok(None) => {
                log!("[STORE] No saved reviews under '{}'", key);
                Vec::new()
            }
            Err(err) => {
                warn!("[STORE] Starting empty, {}", err);
                Vec::new()
            }
        };

        Self {
            slot,
            key,
            reviews,
            dirty: false,
        }
    }

    /// Validates `draft`, prepends it, and writes the whole store back.
    pub fn insert(&mut self, draft: ReviewDraft, now: DateTime<Utc>) -> Result<Inserted, ValidationError> {
        let rating = Rating::try_from(draft.rating)?;
        if draft.comment.trim().is_empty() {
            return Err(ValidationError::CommentRequired);
        }
        let id = match draft.id {
            Some(id) if self.get(id).is_some() => return Err(ValidationError::DuplicateId(id)),
            Some(id) => id,
            None => self.next_id(now),
        };

        self.reviews.insert(
            0,
            Review {
                id,
                name: draft.name,
                rating,
                comment: draft.comment,
                timestamp: draft.timestamp.unwrap_or(now),
            },
        );
        log!("[STORE] Inserted review {} ({} stars)", id, rating);

        let persisted = self.persist();
        Ok(Inserted { id, persisted })
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn get(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == id)
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// True while the slot is behind the in-memory reviews.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    // Millisecond timestamps collide when two reviews land in the same tick,
    // so ids are bumped past the newest one already stored.
    fn next_id(&self, now: DateTime<Utc>) -> ReviewId {
        let candidate = now.timestamp_millis();
        match self.reviews.iter().map(|review| review.id.0).max() {
            Some(newest) if candidate <= newest => match newest.checked_add(1) {
                Some(next) => ReviewId(next),
                None => self.first_free_below(newest),
            },
            _ => ReviewId(candidate),
        }
    }

    // Only reachable once an id of i64::MAX is stored.
    fn first_free_below(&self, newest: i64) -> ReviewId {
        let used: HashSet<i64> = self.reviews.iter().map(|review| review.id.0).collect();
        (i64::MIN..newest)
            .rev()
            .find(|id| !used.contains(id))
            .map_or(ReviewId(i64::MIN), ReviewId)
    }

    fn persist(&mut self) -> bool {
        let payload = match serde_json::to_string(&self.reviews) {
            Ok(payload) => payload,
            Err(err) => {
                error!("[STORE] Could not serialize reviews: {}", err);
                self.dirty = true;
                return false;
            }
        };

        for attempt in 1..=WRITE_ATTEMPTS {
            match self.slot.write(&self.key, &payload) {
                Ok(()) => {
                    self.dirty = false;
                    return true;
                }
                Err(err) => warn!("[STORE] Write attempt {}/{}: {}", attempt, WRITE_ATTEMPTS, err),
            }
        }

        error!("[STORE] Keeping {} reviews in memory only", self.reviews.len());
        self.dirty = true;
        false
    }
}

/// Parses a persisted payload and checks the stored-record invariants.
/// Ratings are range-checked by `Rating`'s deserializer.
pub fn decode(payload: &str) -> Result<Vec<Review>, PayloadError> {
    let reviews: Vec<Review> = serde_json::from_str(payload)?;
    let mut seen = HashSet::new();
    for review in &reviews {
        if review.comment.trim().is_empty() {
            return Err(PayloadError::EmptyComment(review.id));
        }
        if !seen.insert(review.id) {
            return Err(PayloadError::DuplicateId(review.id));
        }
    }
    Ok(reviews)
}
