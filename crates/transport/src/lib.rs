//! Ledger API HTTP transport adapter.
//!
//! Implements the [`ledger::HttpProvider`] trait over [`reqwest`]. Additional
//! transports (e.g. a recording transport for replay) are added as new types in
//! this crate without any changes to the `ledger` crate.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Base URL joining, TLS, timeouts, default headers, status
//! handling and API error-body decoding live here. The [`ledger`] crate sees
//! only [`ledger::HttpProvider`] and [`ledger::TransportError`].

pub mod config;

pub use config::{TransportConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use async_trait::async_trait;
use ledger::{ApiErrorBody, ApiRequest, HttpMethod, HttpProvider, TransportError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, warn};

/// Media type the ledger API speaks for both requests and responses.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// [`HttpProvider`] backed by a pooled [`reqwest::Client`].
///
/// Cloning is cheap: clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Builds a transport with its own client configured from `config`.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|err| TransportError::Request {
                message: format!("failed to build HTTP client: {err}"),
            })?;

        Ok(Self::with_client(client, config.base_url.as_str()))
    }

    /// Wraps an existing client. `base_url` must include any version prefix.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `endpoint` onto the base URL.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request {
            message: err.to_string(),
        }
    }
}

fn map_body_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Body {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl HttpProvider for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
        let url = self.url(&request.endpoint);
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url.as_str());

        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(|err| TransportError::Encode {
                message: err.to_string(),
            })?;
            builder = builder.header(CONTENT_TYPE, JSON_API_MEDIA_TYPE).body(bytes);
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_body_error)?;

        debug!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            "ledger API response"
        );

        if status.is_success() {
            return Ok(body.to_vec());
        }

        // Gateways in front of the API may answer with HTML or nothing at all.
        let error_body: ApiErrorBody = serde_json::from_slice(&body).unwrap_or_default();
        warn!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            error_message = error_body.error_message.as_deref().unwrap_or(""),
            "ledger API returned an error"
        );

        Err(TransportError::Api {
            status: status.as_u16(),
            message: error_body.error_message,
            code: error_body.error_code,
        })
    }
}
