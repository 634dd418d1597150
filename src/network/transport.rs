//! The wire under [`super::ApiClient`].

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::config::ApiConfig;
use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API root, e.g. `/users/u1/instances`.
    pub path: String,
    pub body: Option<Value>,
}

/// Sends one request and returns the decoded JSON body of a 2xx response.
/// Non-2xx statuses and transport failures are errors; nothing is retried.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError>;
}

/// Browser Fetch API transport.
pub struct FetchTransport {
    config: ApiConfig,
}

impl FetchTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let url = self.config.url(&request.path);

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Accept", "application/json")?;
        headers.append("Content-Type", "application/json")?;
        if let Some(body) = &request.body {
            let text = serde_json::to_string(body)?;
            opts.set_body(&JsValue::from_str(&text));
        }
        opts.set_headers(&headers);

        let req = Request::new_with_str_and_init(&url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        // Parse body as text first so an empty 2xx body decodes to null.
        let text = JsFuture::from(resp.text()?).await?;
        let text = text.as_string().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
