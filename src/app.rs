/// Main application entry point for ReviewWare.
/// Loads saved reviews, then wires the form, filters, list and summary to one widget state.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use chrono::{Datelike, Local, Utc};
use crate::components::{
    rating_summary::RatingSummary, review_filters::ReviewFilters, review_form::ReviewForm,
    reviews_list::ReviewsList,
};
use crate::config::WidgetConfig;
use crate::storage::LocalStorageSlot;
use crate::store::ReviewStore;
use crate::widget::{Outcome, ReviewWidget, UiEvent};

/// The single owner of all widget state in the browser.
pub type WidgetSignal = RwSignal<ReviewWidget<LocalStorageSlot>>;

/// Routes a UI event through the widget. Returns None if the widget has
/// already been disposed.
pub fn dispatch(widget: WidgetSignal, event: UiEvent) -> Option<Outcome> {
    widget.try_update(|w| w.dispatch(event, Utc::now()))
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = WidgetConfig::from_document();
    let store = ReviewStore::load(LocalStorageSlot, config.storage_key.clone());
    logging::log!("[APP] Starting with {} saved reviews", store.len());
    let widget = create_rw_signal(ReviewWidget::new(store));
    provide_context(config.clone());

    view! {
        <Title text=format!("{} Reviews", config.product_name) />
        <main class="review-widget">
            <h1>{ config.product_name.clone() }</h1>
            <section class="summary">
                <h2>{ "Average Rating" }</h2>
                <RatingSummary widget=widget />
            </section>
            <section class="add-review">
                <h2>{ "Leave a Review" }</h2>
                <ReviewForm widget=widget />
            </section>
            <section class="reviews">
                <h2>{ "Customer Reviews" }</h2>
                <ReviewFilters widget=widget />
                <ReviewsList widget=widget />
            </section>
        </main>
        <footer>
            { "© " }<span id="current-year">{ Local::now().year() }</span>{ " ReviewWare" }
        </footer>
    }
}
