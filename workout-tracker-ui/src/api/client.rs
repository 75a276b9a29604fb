//! HTTP API Client
//!
//! Sends requests built by the core client through `fetch`.

use async_trait::async_trait;
use gloo_net::http::Request;
use workout_tracker::api::network_error;
use workout_tracker::{ApiClient, ApiResult, Method, RawRequest, RawResponse, Transport};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

/// localStorage key overriding [`DEFAULT_API_BASE`]
const API_URL_KEY: &str = "workouts_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Browser transport backed by `gloo_net`
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, request: RawRequest) -> ApiResult<RawResponse> {
        let url = request.url(&self.base_url);

        let mut builder = match request.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };

        if let Some(auth) = request.authorization() {
            builder = builder.header("Authorization", &auth);
        }

        let response = match &request.body {
            Some(body) => builder.json(body).map_err(network_error)?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| network_error(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        Ok(RawResponse { status, body })
    }
}

/// Workout service client over [`GlooTransport`]
pub type Client = ApiClient<GlooTransport>;

/// Client for the currently configured API base
pub fn client() -> Client {
    ApiClient::new(GlooTransport::new(get_api_base()))
}
