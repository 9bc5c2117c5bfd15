//! Error types for the Account binding and its transport port.
//!
//! [`TransportError`] is produced by [`crate::HttpProvider`] implementations and
//! describes why a single request/response exchange failed.
//!
//! [`AccountsError`] is produced by [`crate::Accounts`]. Each variant names the
//! operation that failed and keeps the underlying cause as its `source`, so the
//! full chain is available to callers that walk [`std::error::Error::source`].

use thiserror::Error;

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Failure of a single HTTP exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be built or sent (connection refused, DNS, TLS…).
    #[error("request failed: {message}")]
    Request {
        /// Description of the underlying client failure.
        message: String,
    },

    /// No response arrived within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The API answered with a non-2xx status.
    ///
    /// `message` and `code` come from the API's error body when it could be
    /// decoded.
    #[error("API returned status {status}{}", api_detail(.message))]
    Api {
        /// HTTP status code.
        status: u16,
        /// `error_message` from the response body.
        message: Option<String>,
        /// `error_code` from the response body.
        code: Option<String>,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {message}")]
    Body {
        /// Description of the read failure.
        message: String,
    },

    /// The request body could not be serialised.
    #[error("failed to encode request body: {message}")]
    Encode {
        /// Description of the serialisation failure.
        message: String,
    },
}

fn api_detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl TransportError {
    /// Returns the HTTP status for [`TransportError::Api`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the API reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the API rejected the request as conflicting with the
    /// resource's current state (duplicate ID, stale version).
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

// ---------------------------------------------------------------------------
// Binding errors
// ---------------------------------------------------------------------------

/// Failure of an [`crate::Accounts`] operation.
#[derive(Debug, Error)]
pub enum AccountsError {
    #[error("error creating Account object")]
    Create(#[source] TransportError),

    #[error("error fetching Account object")]
    Fetch(#[source] TransportError),

    #[error("error deleting Account object")]
    Delete(#[source] TransportError),

    /// The Account could not be serialised into a request body.
    #[error("error encoding Account request object")]
    Encode(#[source] serde_json::Error),

    /// A successful response carried a body that is not a valid Account response.
    #[error("error unmarshaling response body to Account response object")]
    Decode(#[source] serde_json::Error),
}

impl AccountsError {
    /// Returns the wrapped transport error, if the failure happened in transport.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Create(err) | Self::Fetch(err) | Self::Delete(err) => Some(err),
            Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    /// Returns `true` if the API reported that the account does not exist.
    pub fn is_not_found(&self) -> bool {
        self.transport_error().is_some_and(TransportError::is_not_found)
    }

    /// Returns `true` if the API reported a conflict (duplicate ID or stale version).
    pub fn is_conflict(&self) -> bool {
        self.transport_error().is_some_and(TransportError::is_conflict)
    }
}
