pub mod api_client;
pub mod config;
pub mod error;
pub mod transport;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use transport::{ApiRequest, FetchTransport, Method, Transport};

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialize the API configuration from a JS-provided URL.
/// Lets the host page point the console at another backend at runtime.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    store(ApiConfig::from_url(api_base_url));
    Ok(())
}

fn store(config: ApiConfig) {
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(poisoned) => *poisoned.into_inner() = Some(config),
    }
}

/// The API root: the runtime override if the host page set one, else the
/// build-time `API_BASE_URL`, else same-origin `/api`.
pub fn current_api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .or_else(|| ApiConfig::new().ok())
        .unwrap_or_default()
}
