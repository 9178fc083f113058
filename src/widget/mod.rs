//! The review widget's state and the table of UI events that drive it.
//! Components only translate DOM events into `UiEvent`s; everything that
//! decides what happens lives here and runs without a browser.
pub mod emoji;

use crate::aggregate::{aggregate, Aggregate};
use crate::error::ValidationError;
use crate::filter::{FilterCriteria, MinRating};
use crate::models::rating::Rating;
use crate::models::review::{Review, ReviewDraft, ReviewId};
use crate::render::{render_list, render_summary, ListView, SummaryView};
use crate::storage::KeyValueSlot;
use crate::store::{Inserted, ReviewStore};
use chrono::{DateTime, Utc};
use emoji::EmojiRatingInput;
use leptos::logging::{log, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Hover(Rating),
    LeaveRating,
    Select(Rating),
    NameChanged(String),
    CommentChanged(String),
    Submit,
    SearchChanged(String),
    FilterChanged(MinRating),
    HighlightExpired(ReviewId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Submitted(Inserted),
    Rejected(ValidationError),
}

/// `Validating` only exists for the duration of a single submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
}

pub struct ReviewWidget<S> {
    store: ReviewStore<S>,
    rating_input: EmojiRatingInput,
    name: String,
    comment: String,
    criteria: FilterCriteria,
    highlight: Option<ReviewId>,
    form_error: Option<ValidationError>,
    storage_warning: bool,
    phase: FormPhase,
}

impl<S: KeyValueSlot> ReviewWidget<S> {
    pub fn new(store: ReviewStore<S>) -> Self {
        Self {
            store,
            rating_input: EmojiRatingInput::default(),
            name: String::new(),
            comment: String::new(),
            criteria: FilterCriteria::default(),
            highlight: None,
            form_error: None,
            storage_warning: false,
            phase: FormPhase::Idle,
        }
    }

    pub fn dispatch(&mut self, event: UiEvent, now: DateTime<Utc>) -> Outcome {
        match event {
            UiEvent::Hover(rating) => self.rating_input.hover(rating),
            UiEvent::LeaveRating => self.rating_input.leave(),
            UiEvent::Select(rating) => self.rating_input.select(rating),
            UiEvent::NameChanged(name) => self.name = name,
            UiEvent::CommentChanged(comment) => {
                self.comment = comment;
                self.form_error = None;
            }
            UiEvent::Submit => return self.submit(now),
            UiEvent::SearchChanged(term) => self.criteria.search_term = term,
            UiEvent::FilterChanged(min_rating) => self.criteria.min_rating = min_rating,
            UiEvent::HighlightExpired(id) => {
                // A newer review may have taken the highlight since.
                if self.highlight == Some(id) {
                    self.highlight = None;
                }
            }
        }
        Outcome::Updated
    }

    /// Builds a review from the current inputs and stores it. Rejections
    /// leave the store untouched.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Outcome {
        self.phase = FormPhase::Validating;
        let outcome = self.validate_and_insert(now);
        self.phase = FormPhase::Idle;
        outcome
    }

    fn validate_and_insert(&mut self, now: DateTime<Utc>) -> Outcome {
        let rating = self.rating_input.current_rating();
        if rating == 0 {
            log!("[WIDGET] Submission rejected: no rating selected");
            self.rating_input.show_error();
            return Outcome::Rejected(ValidationError::RatingRequired);
        }

        let draft = ReviewDraft {
            timestamp: Some(now),
            ..ReviewDraft::new(self.name.trim(), rating, self.comment.trim())
        };
        if draft.comment.is_empty() {
            log!("[WIDGET] Submission rejected: empty comment");
            self.form_error = Some(ValidationError::CommentRequired);
            return Outcome::Rejected(ValidationError::CommentRequired);
        }

        match self.store.insert(draft, now) {
            Ok(inserted) => {
                self.storage_warning = !inserted.persisted;
                if !inserted.persisted {
                    warn!("[WIDGET] Review {} kept for this session only", inserted.id);
                }
                self.highlight = Some(inserted.id);
                self.name.clear();
                self.comment.clear();
                self.form_error = None;
                self.rating_input.reset();
                Outcome::Submitted(inserted)
            }
            Err(err) => {
                self.form_error = Some(err);
                Outcome::Rejected(err)
            }
        }
    }

    /// Store records passing the current search and rating filter.
    pub fn visible(&self) -> Vec<&Review> {
        self.criteria.apply(self.store.all())
    }

    pub fn list_view(&self) -> ListView {
        render_list(&self.visible(), self.store.is_empty(), self.highlight)
    }

    pub fn aggregate(&self) -> Aggregate {
        aggregate(self.store.all())
    }

    pub fn summary_view(&self) -> SummaryView {
        render_summary(&self.aggregate())
    }

    pub fn store(&self) -> &ReviewStore<S> {
        &self.store
    }

    pub fn rating_input(&self) -> &EmojiRatingInput {
        &self.rating_input
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn highlight(&self) -> Option<ReviewId> {
        self.highlight
    }

    pub fn form_error(&self) -> Option<ValidationError> {
        self.form_error
    }

    /// Set while the latest write to storage failed.
    pub fn storage_warning(&self) -> bool {
        self.storage_warning
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EmptyState;
    use crate::storage::testing::FlakySlot;
    use crate::storage::MemorySlot;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_736_078_400, 0).unwrap()
    }

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    fn widget() -> ReviewWidget<MemorySlot> {
        ReviewWidget::new(ReviewStore::load(MemorySlot::default(), "reviews"))
    }

    fn submit_review<S: KeyValueSlot>(w: &mut ReviewWidget<S>, stars: u8, name: &str, comment: &str) -> Outcome {
        w.dispatch(UiEvent::Select(rating(stars)), now());
        w.dispatch(UiEvent::NameChanged(name.into()), now());
        w.dispatch(UiEvent::CommentChanged(comment.into()), now());
        w.dispatch(UiEvent::Submit, now())
    }

    #[test]
    fn test_submit_without_rating_is_rejected() {
        log!("[TEST] Starting test_submit_without_rating_is_rejected");
        let mut w = widget();
        w.dispatch(UiEvent::CommentChanged("nice".into()), now());
        let outcome = w.dispatch(UiEvent::Submit, now());

        assert_eq!(outcome, Outcome::Rejected(ValidationError::RatingRequired));
        assert!(w.rating_input().error_visible());
        assert!(w.store().is_empty());
        assert_eq!(w.comment(), "nice");
        assert_eq!(w.phase(), FormPhase::Idle);

        // Picking a rating clears the error.
        w.dispatch(UiEvent::Select(rating(3)), now());
        assert!(!w.rating_input().error_visible());
        log!("[TEST] Missing rating - PASSED");
    }

    #[test]
    fn test_submit_with_blank_comment_is_rejected() {
        let mut w = widget();
        let outcome = submit_review(&mut w, 4, "Kai", "   ");
        assert_eq!(outcome, Outcome::Rejected(ValidationError::CommentRequired));
        assert_eq!(w.form_error(), Some(ValidationError::CommentRequired));
        assert!(w.store().is_empty());
        assert_eq!(w.rating_input().current_rating(), 4);

        w.dispatch(UiEvent::CommentChanged("ok then".into()), now());
        assert_eq!(w.form_error(), None);
    }

    #[test]
    fn test_successful_submit_resets_inputs() {
        log!("[TEST] Starting test_successful_submit_resets_inputs");
        let mut w = widget();
        let Outcome::Submitted(inserted) = submit_review(&mut w, 5, "  Ana ", " great \n") else {
            panic!("submission should succeed");
        };

        let stored = &w.store().all()[0];
        assert_eq!(stored.name, "Ana");
        assert_eq!(stored.comment, "great");
        assert_eq!(stored.rating, rating(5));
        assert_eq!(stored.timestamp, now());
        assert!(inserted.persisted);

        assert_eq!(w.highlight(), Some(inserted.id));
        assert_eq!(w.name(), "");
        assert_eq!(w.comment(), "");
        assert_eq!(w.rating_input(), &EmojiRatingInput::default());
        assert!(!w.storage_warning());
        log!("[TEST] Successful submit - PASSED");
    }

    #[test]
    fn test_stored_records_always_valid() {
        let mut w = widget();
        submit_review(&mut w, 2, "", "");
        submit_review(&mut w, 3, "", "fine");
        w.dispatch(UiEvent::CommentChanged("no rating".into()), now());
        w.dispatch(UiEvent::Submit, now());
        submit_review(&mut w, 1, "", "awful");

        assert_eq!(w.store().len(), 2);
        assert!(w
            .store()
            .all()
            .iter()
            .all(|r| (1..=5).contains(&r.rating.value()) && !r.comment.is_empty()));
    }

    #[test]
    fn test_filters_and_summary() {
        let mut w = widget();
        assert_eq!(w.list_view(), ListView::Empty(EmptyState::NoReviews));
        assert_eq!(w.summary_view(), SummaryView::NoRatings);

        submit_review(&mut w, 1, "", "bad");
        submit_review(&mut w, 5, "", "great");

        w.dispatch(UiEvent::SearchChanged("great".into()), now());
        let visible: Vec<&str> = w.visible().iter().map(|r| r.comment.as_str()).collect();
        assert_eq!(visible, vec!["great"]);

        w.dispatch(UiEvent::SearchChanged(String::new()), now());
        w.dispatch(UiEvent::FilterChanged(MinRating::parse("5")), now());
        assert_eq!(w.visible().len(), 1);

        w.dispatch(UiEvent::SearchChanged("bad".into()), now());
        assert_eq!(w.list_view(), ListView::Empty(EmptyState::NoMatches));

        // The aggregate ignores filters.
        assert_eq!(
            w.aggregate(),
            Aggregate::Rated {
                count: 2,
                mean_1dp: 3.0,
                mean_int: rating(3),
            }
        );
    }

    #[test]
    fn test_typing_leaves_rendered_markup_unchanged() {
        let mut w = widget();
        submit_review(&mut w, 4, "", "solid");
        let list = w.list_view().to_markup("Gadget");
        let summary = w.summary_view().to_markup();

        w.dispatch(UiEvent::Hover(rating(2)), now());
        w.dispatch(UiEvent::NameChanged("Sam".into()), now());
        w.dispatch(UiEvent::CommentChanged("draft".into()), now());
        w.dispatch(UiEvent::LeaveRating, now());

        assert_eq!(w.list_view().to_markup("Gadget"), list);
        assert_eq!(w.summary_view().to_markup(), summary);
    }

    #[test]
    fn test_highlight_expiry() {
        let mut w = widget();
        let Outcome::Submitted(first) = submit_review(&mut w, 3, "", "one") else {
            panic!("submission should succeed");
        };
        let Outcome::Submitted(second) = submit_review(&mut w, 4, "", "two") else {
            panic!("submission should succeed");
        };

        // A stale timer must not clear the newer highlight.
        w.dispatch(UiEvent::HighlightExpired(first.id), now());
        assert_eq!(w.highlight(), Some(second.id));
        w.dispatch(UiEvent::HighlightExpired(second.id), now());
        assert_eq!(w.highlight(), None);
    }

    #[test]
    fn test_storage_failure_warns_but_keeps_review() {
        let mut w = ReviewWidget::new(ReviewStore::load(FlakySlot::failing(2), "reviews"));
        let Outcome::Submitted(inserted) = submit_review(&mut w, 4, "", "offline") else {
            panic!("submission should succeed");
        };
        assert!(!inserted.persisted);
        assert!(w.storage_warning());
        assert_eq!(w.visible().len(), 1);

        submit_review(&mut w, 5, "", "back online");
        assert!(!w.storage_warning());
        assert!(!w.store().is_dirty());
    }
}
