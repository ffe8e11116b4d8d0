//! ACM console header - entry point
//!
//! Launches the Dioxus app: WASM in the browser, desktop renderer natively.

use acm_header::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] ACM console header initialized".into());
    dioxus::launch(App);
}

// Native entry point (desktop development build)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting ACM console header...");
    dioxus::launch(App);
}
