//! Binding for the Account resource.
//!
//! [`Accounts`] turns typed calls into [`ApiRequest`]s, hands them to the
//! injected [`HttpProvider`], and decodes the responses. It holds no state
//! besides the transport, so it is as cheap to clone as the transport is.

use tracing::{debug, instrument};

use crate::envelope::{AccountResponse, CreateAccountRequest};
use crate::{Account, AccountId, AccountVersion, AccountsError, ApiRequest, HttpProvider};

const CREATE_ACCOUNT_ENDPOINT: &str = "/organisation/accounts";

fn fetch_account_endpoint(id: &AccountId) -> String {
    format!("/organisation/accounts/{id}")
}

fn delete_account_endpoint(id: &AccountId, version: AccountVersion) -> String {
    format!("/organisation/accounts/{id}?version={version}")
}

/// Client for the Account resource.
#[derive(Debug, Clone)]
pub struct Accounts<T> {
    transport: T,
}

impl<T: HttpProvider> Accounts<T> {
    /// Creates a binding that sends its requests through `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates a new Account and returns the object as stored by the API,
    /// including server-assigned fields such as `version`.
    #[instrument(skip_all, fields(account_id = %account.id))]
    pub async fn create(&self, account: &Account) -> Result<Account, AccountsError> {
        let body = serde_json::to_value(CreateAccountRequest { data: account })
            .map_err(AccountsError::Encode)?;

        let response = self
            .transport
            .send(ApiRequest::post(CREATE_ACCOUNT_ENDPOINT, body))
            .await
            .map_err(AccountsError::Create)?;

        let created = decode_account(&response)?;
        debug!(version = ?created.version, "account created");
        Ok(created)
    }

    /// Fetches an existing Account by its ID.
    #[instrument(skip_all, fields(account_id = %id))]
    pub async fn fetch(&self, id: &AccountId) -> Result<Account, AccountsError> {
        let response = self
            .transport
            .send(ApiRequest::get(fetch_account_endpoint(id)))
            .await
            .map_err(AccountsError::Fetch)?;

        decode_account(&response)
    }

    /// Deletes an existing Account by its ID and the version last observed.
    ///
    /// The response body, if any, is ignored.
    #[instrument(skip_all, fields(account_id = %id, version = %version))]
    pub async fn delete(
        &self,
        id: &AccountId,
        version: AccountVersion,
    ) -> Result<(), AccountsError> {
        self.transport
            .send(ApiRequest::delete(delete_account_endpoint(id, version)))
            .await
            .map_err(AccountsError::Delete)?;

        debug!("account deleted");
        Ok(())
    }
}

fn decode_account(body: &[u8]) -> Result<Account, AccountsError> {
    let response: AccountResponse = serde_json::from_slice(body).map_err(AccountsError::Decode)?;
    Ok(response.data)
}
