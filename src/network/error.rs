use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// A backend call that did not happen.  Callers treat every variant the
/// same way: abort their own flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `fetch` rejected or a JS exception escaped while building the request.
    #[error("falha de rede: {0}")]
    Transport(String),

    #[error("API Error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The body was not JSON, or not the shape the endpoint promises.
    #[error("resposta inválida: {0}")]
    Decode(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        // fetch rejects with a TypeError; keep its message, not the debug dump.
        let text = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        ApiError::Transport(text)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
