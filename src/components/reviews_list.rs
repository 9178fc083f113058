use leptos::*;
use gloo_timers::callback::Timeout;
use crate::app::{dispatch, WidgetSignal};
use crate::config::WidgetConfig;
use crate::utils::leptos_owner::with_owner_safe;
use crate::widget::UiEvent;

/// The filtered review cards. A freshly submitted review is highlighted
/// until its timer fires.
#[component]
pub fn ReviewsList(widget: WidgetSignal) -> impl IntoView {
    let config = use_context::<WidgetConfig>().unwrap_or_default();
    let highlight_ms = config.highlight_ms;
    let product_name = config.product_name;

    // Holds the running timer; dropping a Timeout cancels it.
    let pending = store_value(None::<Timeout>);
    let owner = Owner::current();
    let highlight = create_memo(move |_| widget.with(|w| w.highlight()));
    // Typing and hovering change the widget but not the list; the memo keeps
    // the container (and its animation) untouched until the markup differs.
    let markup = create_memo(move |_| widget.with(|w| w.list_view().to_markup(&product_name)));

    create_effect(move |_| {
        let Some(id) = highlight.get() else {
            return;
        };
        let timeout = Timeout::new(highlight_ms, move || {
            with_owner_safe(owner, "highlight expiry", move || {
                dispatch(widget, UiEvent::HighlightExpired(id));
            });
        });
        // Replacing the previous timer cancels it.
        pending.set_value(Some(timeout));
    });

    on_cleanup(move || {
        let _ = pending.try_update_value(|timeout| timeout.take());
    });

    view! {
        <div
            id="reviews-list"
            class="reviews-list"
            inner_html=move || markup.get()
        />
    }
}
