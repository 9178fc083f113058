//! Projects reviews and aggregates into display models, and serializes
//! those into escaped HTML for the widget's containers.
use crate::aggregate::Aggregate;
use crate::models::review::{Review, ReviewId};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Display};

pub const ANONYMOUS: &str = "Anonymous";
pub const NO_MATCHES_MESSAGE: &str = "No reviews match your current filters.";
pub const NO_RATINGS_MESSAGE: &str = "No ratings yet";

/// Escapes `& < > " '` for use in element text and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// en-US short date, e.g. `Jan 5, 2025`.
pub fn format_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    timestamp.format("%b %-d, %Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub id: ReviewId,
    pub name: String,
    pub emoji: &'static str,
    pub title: String,
    pub comment: String,
    pub date: String,
    pub highlighted: bool,
}

impl ReviewCard {
    pub fn from_review(review: &Review, highlight: Option<ReviewId>) -> Self {
        let name = if review.name.is_empty() {
            ANONYMOUS.to_string()
        } else {
            review.name.clone()
        };
        Self {
            id: review.id,
            name,
            emoji: review.rating.emoji(),
            title: format!("{}/5 - {}", review.rating, review.rating.label()),
            comment: review.comment.clone(),
            date: format_date(&review.timestamp.with_timezone(&Local)),
            highlighted: highlight == Some(review.id),
        }
    }
}

/// Writes the card as escaped HTML.
impl Display for ReviewCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = if self.highlighted {
            "review-item newly-added"
        } else {
            "review-item"
        };
        write!(
            f,
            concat!(
                r#"<div class="{}" data-review-id="{}">"#,
                r#"<div class="review-header"><h4>{}</h4>"#,
                r#"<div class="rating"><span class="rating-emoji" title="{}">{}</span></div></div>"#,
                r#"<p class="comment-text">{}</p>"#,
                r#"<p class="timestamp">Reviewed on: {}</p>"#,
                "</div>"
            ),
            class,
            self.id,
            escape_html(&self.name),
            escape_html(&self.title),
            self.emoji,
            escape_html(&self.comment),
            escape_html(&self.date),
        )
    }
}

/// Which message an empty list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store itself has no reviews.
    NoReviews,
    /// Reviews exist but none pass the filters.
    NoMatches,
}

impl EmptyState {
    pub fn message(self, product_name: &str) -> String {
        match self {
            EmptyState::NoReviews => format!("Be the first to review the {}!", product_name),
            EmptyState::NoMatches => NO_MATCHES_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty(EmptyState),
    Cards(Vec<ReviewCard>),
}

impl ListView {
    pub fn to_markup(&self, product_name: &str) -> String {
        match self {
            ListView::Empty(state) => format!(
                r#"<p class="no-reviews-message">{}</p>"#,
                escape_html(&state.message(product_name))
            ),
            ListView::Cards(cards) => cards.iter().map(ReviewCard::to_string).collect(),
        }
    }
}

pub fn render_list(filtered: &[&Review], store_is_empty: bool, highlight: Option<ReviewId>) -> ListView {
    if filtered.is_empty() {
        return ListView::Empty(if store_is_empty {
            EmptyState::NoReviews
        } else {
            EmptyState::NoMatches
        });
    }
    ListView::Cards(
        filtered
            .iter()
            .map(|review| ReviewCard::from_review(review, highlight))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryView {
    NoRatings,
    Rated {
        emoji: &'static str,
        label: &'static str,
        mean: String,
        count: usize,
    },
}

impl SummaryView {
    pub fn count_label(&self) -> String {
        match self {
            SummaryView::NoRatings => String::new(),
            SummaryView::Rated { count: 1, .. } => "(1 review)".to_string(),
            SummaryView::Rated { count, .. } => format!("({} reviews)", count),
        }
    }

    pub fn to_markup(&self) -> String {
        match self {
            SummaryView::NoRatings => format!(r#"<span class="no-rating">{}</span>"#, NO_RATINGS_MESSAGE),
            SummaryView::Rated { emoji, label, mean, .. } => format!(
                concat!(
                    r#"<span class="rating-emoji" title="{}">{}</span>"#,
                    "<strong>{} / 5</strong>",
                    r#"<span class="review-count">{}</span>"#
                ),
                label,
                emoji,
                mean,
                self.count_label()
            ),
        }
    }
}

pub fn render_summary(aggregate: &Aggregate) -> SummaryView {
    match *aggregate {
        Aggregate::NoRatings => SummaryView::NoRatings,
        Aggregate::Rated { count, mean_1dp, mean_int } => SummaryView::Rated {
            emoji: mean_int.emoji(),
            label: mean_int.label(),
            mean: format!("{:.1}", mean_1dp),
            count,
        },
    }
}
