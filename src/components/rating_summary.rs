use leptos::*;
use crate::app::WidgetSignal;

/// Average rating over every stored review.
#[component]
pub fn RatingSummary(widget: WidgetSignal) -> impl IntoView {
    let markup = create_memo(move |_| widget.with(|w| w.summary_view().to_markup()));

    view! {
        <div
            id="average-rating-display"
            class="average-rating"
            inner_html=move || markup.get()
        />
    }
}
