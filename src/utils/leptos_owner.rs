use leptos::Owner;

/// Runs `f` under an owner captured earlier, e.g. when a component set up a
/// timer. Returns None and logs when the owner is gone or was never there.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R + 'static,
    R: 'static,
{
    match owner {
        Some(owner) => leptos::try_with_owner(owner, f).ok(),
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner for: {}", log_context);
            None
        }
    }
}
