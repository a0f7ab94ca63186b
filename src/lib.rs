use std::rc::Rc;

use wasm_bindgen::prelude::*;

mod constants;
mod dom_utils;
mod error;
mod host;
mod messages;
mod models;
mod render;
mod schema_validation;
mod state;
mod toast;
mod update;
mod views;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

use host::TauriSink;
use state::ViewContext;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    init_logging();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // The three view regions are part of the host document.  Acquiring them
    // up-front means an event arriving early hits a fully constructed context
    // or no subscription at all, never a half-initialised one.
    let ctx = match ViewContext::acquire(&document, Rc::new(TauriSink)) {
        Ok(ctx) => Rc::new(ctx),
        Err(err) => {
            log::error!("view binder failed to start: {err}");
            toast::error(&format!("View failed to start: {err}"));
            return Err(err.into());
        }
    };

    // Subscriptions persist for the lifetime of the webview.
    host::subscribe(ctx)?;

    log::info!("view binder ready");
    Ok(())
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second init (e.g. from the test harness) is not an error worth surfacing.
    let _ = console_log::init_with_level(level);
}
