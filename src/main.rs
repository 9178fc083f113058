#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function
    // build with `trunk serve --open --features csr`
}

#[cfg(feature = "csr")]
pub fn main() {
    use reviewware::app::*;

    reviewware::utils::panic_hook::init();

    leptos::mount_to_body(App);
}
