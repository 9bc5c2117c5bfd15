//! Typed binding for the ledger API's Account resource.
//!
//! This crate contains the Account data model, the wire envelopes, the
//! [`Accounts`] resource binding and the [`HttpProvider`] port it sends requests
//! through. Infrastructure crates implement [`HttpProvider`]; they never add
//! resource rules.
//!
//! ## Architectural Layer
//!
//! **Resource binding + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is sent; the `transport` crate defines *how* it is sent.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`AccountId`, `OrganisationId`, `AccountVersion`) |
//! | [`types`] | Account value types (`Account`, `AccountAttributes`, `Timestamp`, etc.) |
//! | [`envelope`] | Request/response wrappers and the API error body |
//! | [`transport`] | The [`HttpProvider`] port and [`ApiRequest`] |
//! | [`accounts`] | The [`Accounts`] resource binding |
//! | [`errors`] | [`TransportError`] and [`AccountsError`] |
//!
//! ## Example
//!
//! ```no_run
//! # async fn run(transport: impl ledger::HttpProvider) -> Result<(), ledger::AccountsError> {
//! use ledger::{Account, AccountAttributes, AccountId, Accounts, OrganisationId};
//!
//! let accounts = Accounts::new(transport);
//! let account = Account::new(
//!     AccountId::new_random(),
//!     OrganisationId::new_random(),
//!     AccountAttributes::new("GB"),
//! );
//!
//! let created = accounts.create(&account).await?;
//! let fetched = accounts.fetch(&created.id).await?;
//! accounts
//!     .delete(&fetched.id, fetched.version.unwrap_or(ledger::AccountVersion::INITIAL))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod envelope;
pub mod errors;
pub mod identifiers;
pub mod transport;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use accounts::Accounts;
pub use envelope::{
    AccountResponse, ApiErrorBody, CreateAccountRequest, CreateAccountResponse,
    FetchAccountResponse, Links,
};
pub use errors::{AccountsError, TransportError};
pub use identifiers::{AccountId, AccountVersion, OrganisationId};
pub use transport::{ApiRequest, HttpMethod, HttpProvider};
pub use types::{
    Account, AccountAttributes, AccountClassification, AccountStatus, Timestamp,
    ACCOUNT_RESOURCE_TYPE,
};
