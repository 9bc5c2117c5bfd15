//! Wire envelopes wrapping Account objects in requests and responses.
//!
//! The API wraps every resource in a `data` member and may add hypermedia
//! `links`. Failed requests carry an [`ApiErrorBody`] instead.

use serde::{Deserialize, Serialize};

use crate::Account;

/// Body of a create request: `{"data": <account>}`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountRequest<'a> {
    pub data: &'a Account,
}

/// Body of a successful create or fetch response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub data: Account,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Response returned by a create request.
pub type CreateAccountResponse = AccountResponse;

/// Response returned by a fetch request.
pub type FetchAccountResponse = AccountResponse;

/// Hypermedia links attached to a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error_message: Option<String>,
    pub error_code: Option<String>,
}
