use leptos::logging::log;
use std::panic;

/// Forwards panics to the browser console and adds context for the
/// failures this widget can actually hit.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal was used after the review widget was unmounted.");
            log!("[PANIC] Check for highlight timers or event handlers outliving the component.");
        }
        log!("[PANIC] Saved reviews are untouched in localStorage; reloading the page recovers.");
    }));
}

pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
