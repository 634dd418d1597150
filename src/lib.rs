//! Browser admin console for a WhatsApp bot platform.
//!
//! The host page loads the wasm bundle, optionally calls
//! `init_api_config_js(url)`, then calls [`boot`].

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

// Export convenience macros crate-wide
#[macro_use]
mod macros;

pub mod app;
pub mod components;
pub mod constants;
pub mod dialog;
pub mod dom_utils;
pub mod handlers;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod router;
pub mod state;
pub mod ui;
pub mod update;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

/// Build the shell and start the console.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let document = dom_utils::document()?;
    ui::setup::create_shell(&document)?;

    let config = network::current_api_config();
    debug_log!("API root: {}", config.base_url());

    let dialogs = Rc::new(components::ModalManager::new(document.clone()));
    let transport = Rc::new(network::FetchTransport::new(config));
    let api = network::ApiClient::new(transport, dialogs.clone());
    let surface = Rc::new(components::DomSurface::new(document));
    let app = app::App::new(state::AppState::shared(), api, dialogs, surface);

    spawn_local(async move { app.start().await });
    Ok(())
}
