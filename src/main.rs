//! Delivery App Builder - browser entry point.
//!
//! Built with `dx build --features web`; the whole UI runs client-side and
//! navigation state lives in the location fragment.

use delivery_app_builder::{app, config};

fn main() {
    let config = config::load_config_or_default();

    if let Err(e) = dioxus::logger::init(config.tracing_level()) {
        // Already initialized (hot reload); keep going with the existing one
        console_warn(&format!("Logger init failed: {e}"));
    }

    tracing::info!(
        "Starting {} v{} ({})",
        config.app_name,
        env!("DAB_VERSION"),
        env!("DAB_GIT_SHA")
    );

    dioxus::launch(app::App);
}

#[cfg(target_arch = "wasm32")]
fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_warn(message: &str) {
    eprintln!("{}", message);
}
