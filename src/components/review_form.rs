use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use crate::app::{dispatch, WidgetSignal};
use crate::components::emoji_rating::EmojiRating;
use crate::widget::{Outcome, UiEvent};

#[component]
pub fn ReviewForm(widget: WidgetSignal) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match dispatch(widget, UiEvent::Submit) {
            Some(Outcome::Submitted(inserted)) => log!("[FORM] Review {} submitted", inserted.id),
            Some(Outcome::Rejected(err)) => log!("[FORM] Submission rejected: {}", err),
            _ => {}
        }
    };

    view! {
        <form id="add-review-form" on:submit=handle_submit>
            <label for="reviewer-name">{ "Your name (optional)" }</label>
            <input
                type="text"
                id="reviewer-name"
                placeholder="Anonymous"
                prop:value=move || widget.with(|w| w.name().to_string())
                on:input=move |e| { dispatch(widget, UiEvent::NameChanged(event_target_value(&e))); }
            />
            <label>{ "Your rating" }</label>
            <EmojiRating widget=widget />
            <label for="comment">{ "Your review" }</label>
            <textarea
                id="comment"
                placeholder="What did you think?"
                required
                prop:value=move || widget.with(|w| w.comment().to_string())
                on:input=move |e| { dispatch(widget, UiEvent::CommentChanged(event_target_value(&e))); }
            />
            {move || widget.with(|w| w.form_error()).map(|err| view! {
                <p class="form-error">{ err.to_string() }</p>
            })}
            {move || widget.with(|w| w.storage_warning()).then(|| view! {
                <p class="storage-warning">
                    { "Your review is shown, but it could not be saved on this device and will be gone after a reload." }
                </p>
            })}
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
