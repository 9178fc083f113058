use leptos::*;
use crate::app::{dispatch, WidgetSignal};
use crate::filter::MinRating;
use crate::models::rating::Rating;
use crate::widget::UiEvent;

/// Search box and minimum-rating select.
#[component]
pub fn ReviewFilters(widget: WidgetSignal) -> impl IntoView {
    view! {
        <div class="review-filters">
            <input
                type="search"
                id="search-term"
                placeholder="Search reviews..."
                on:input=move |e| { dispatch(widget, UiEvent::SearchChanged(event_target_value(&e))); }
            />
            <select
                id="filter-rating"
                on:change=move |e| { dispatch(widget, UiEvent::FilterChanged(MinRating::parse(&event_target_value(&e)))); }
            >
                <option value=MinRating::All.as_value()>{ "All ratings" }</option>
                {
                    Rating::ALL.into_iter().rev().map(|rating| view! {
                        <option value=MinRating::AtLeast(rating).as_value()>
                            { format!("{} {}+ ({})", rating.emoji(), rating, rating.label()) }
                        </option>
                    }).collect::<Vec<_>>()
                }
            </select>
        </div>
    }
}
