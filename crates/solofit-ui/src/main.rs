//! WASM entry point for the Leptos CSR app
//!
//! Loads the embedded configuration, installs console logging and mounts
//! the App component to the document body.

use leptos::prelude::*;
use solofit_core::{AppConfig, ResultExt};
use solofit_ui::App;
use solofit_ui::{config, logging};
use tracing::Level;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let loaded = config::load_embedded();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|c| c.logging.level().ok())
        .unwrap_or(Level::INFO);

    if let Err(e) = logging::init(level) {
        web_sys::console::error_1(&e.to_string().into());
    }

    let config = loaded.or_default_logged(AppConfig::default());
    tracing::info!(
        min_password_length = config.auth.min_password_length,
        require_complexity = config.auth.require_complexity,
        "starting SoloFit"
    );

    mount_to_body(move || {
        view! {
            <App config=config />
        }
    });
}
