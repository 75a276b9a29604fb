//! reqwest Transport
//!
//! Native HTTP transport for the terminal client and integration tests.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{network_error, ApiClient, Method, RawRequest, RawResponse, Transport};
use crate::error::ApiResult;

/// API client backed by reqwest
pub type HttpClient = ApiClient<ReqwestTransport>;

/// Sends [`RawRequest`]s with a shared reqwest [`Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for `base_url`.
    ///
    /// Without `timeout` the reqwest default applies.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(network_error)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HttpClient {
    /// Shorthand for an [`ApiClient`] over a fresh [`ReqwestTransport`]
    pub fn connect(base_url: impl Into<String>, timeout: Option<Duration>) -> ApiResult<Self> {
        Ok(ApiClient::new(ReqwestTransport::new(base_url, timeout)?))
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: RawRequest) -> ApiResult<RawResponse> {
        let url = request.url(&self.base_url);

        let mut builder = match request.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(auth) = request.authorization() {
            builder = builder.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                network_error("request timed out")
            } else if e.is_connect() {
                network_error(format!("cannot reach {}", self.base_url))
            } else {
                network_error(e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;

        Ok(RawResponse { status, body })
    }
}
