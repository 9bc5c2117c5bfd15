//! The HTTP transport port.
//!
//! [`HttpProvider`] is the only seam between the Account binding and the
//! network. The binding decides *what* to send (method, endpoint, JSON body);
//! implementations decide *how*: base URL, TLS, timeouts, status handling.
//! The `transport` crate supplies the production implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::TransportError;

/// HTTP methods used by the ledger API bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request to the ledger API.
///
/// `endpoint` is relative to the API base URL (e.g.
/// `/organisation/accounts/{id}?version=0`) and may include a query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            body: None,
        }
    }

    pub fn post(endpoint: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            endpoint: endpoint.into(),
            body: Some(body),
        }
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            endpoint: endpoint.into(),
            body: None,
        }
    }
}

/// Sends one request to the ledger API and returns the raw response body.
///
/// Implementations return `Ok` only for successful (2xx) responses; every other
/// outcome is a [`TransportError`]. An empty body (e.g. `204 No Content`) is
/// returned as an empty vector.
#[async_trait]
pub trait HttpProvider: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError>;
}

#[async_trait]
impl<T: HttpProvider + ?Sized> HttpProvider for Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: HttpProvider + ?Sized> HttpProvider for Box<T> {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
        (**self).send(request).await
    }
}
