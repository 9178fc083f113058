use leptos::*;
use crate::app::{dispatch, WidgetSignal};
use crate::models::rating::Rating;
use crate::widget::UiEvent;

/// Five emoji buttons with a hover label above them.
#[component]
pub fn EmojiRating(widget: WidgetSignal) -> impl IntoView {
    let hover_label = move || widget.with(|w| w.rating_input().hover_label());
    let current = move || widget.with(|w| w.rating_input().current_rating());
    let error_visible = move || widget.with(|w| w.rating_input().error_visible());

    view! {
        <div class="emoji-rating-field">
            <span class="rating-label-display" class:visible=move || hover_label().is_some()>
                { move || hover_label().unwrap_or_default() }
            </span>
            <div
                class="emoji-rating-input"
                data-rating=move || current().to_string()
                on:mouseleave=move |_| { dispatch(widget, UiEvent::LeaveRating); }
            >
                {
                    Rating::ALL.into_iter().map(|rating| {
                        view! {
                            <span
                                class="emoji-rating"
                                class:selected=move || widget.with(|w| w.rating_input().is_selected(rating))
                                data-value=rating.value().to_string()
                                title=rating.label()
                                on:mouseover=move |_| { dispatch(widget, UiEvent::Hover(rating)); }
                                on:click=move |_| { dispatch(widget, UiEvent::Select(rating)); }
                            >
                                { rating.emoji() }
                            </span>
                        }
                    }).collect::<Vec<_>>()
                }
            </div>
            <p class="error-message" id="rating-error" style:display=move || if error_visible() { "block" } else { "none" }>
                { "Please select a rating." }
            </p>
        </div>
    }
}
