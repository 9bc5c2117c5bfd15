//! Account resource data model.
//!
//! These types mirror the API's JSON representation of an Account. Optional
//! attributes are omitted from serialised output when unset, and unknown fields
//! in responses are ignored so that additive API changes do not break decoding.
//!
//! No validation beyond structural decoding is performed: the API is the
//! authority on which attribute combinations are acceptable for a country.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, AccountVersion, OrganisationId};

/// Resource type tag carried by every Account object.
pub const ACCOUNT_RESOURCE_TYPE: &str = "accounts";

fn default_resource_type() -> String {
    ACCOUNT_RESOURCE_TYPE.to_string()
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// An Account resource object.
///
/// `version`, `created_on` and `modified_on` are assigned by the server; they
/// are `None` on objects built locally for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Client-chosen unique identifier of the account.
    pub id: AccountId,

    /// Organisation that owns the account.
    pub organisation_id: OrganisationId,

    /// Resource type; always [`ACCOUNT_RESOURCE_TYPE`].
    #[serde(rename = "type", default = "default_resource_type")]
    pub resource_type: String,

    /// Server-maintained version, required to delete the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<AccountVersion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<Timestamp>,

    /// Account details.
    pub attributes: AccountAttributes,
}

impl Account {
    /// Creates an account object ready to be submitted for creation.
    pub fn new(
        id: AccountId,
        organisation_id: OrganisationId,
        attributes: AccountAttributes,
    ) -> Self {
        Self {
            id,
            organisation_id,
            resource_type: default_resource_type(),
            version: None,
            created_on: None,
            modified_on: None,
            attributes,
        }
    }
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Details of an account.
///
/// Only `country` is always required by the API. Which other fields are
/// required depends on the country and is enforced server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountAttributes {
    /// ISO 3166-1 alpha-2 country code (e.g. `"GB"`).
    pub country: String,

    /// ISO 4217 currency code (e.g. `"GBP"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,

    /// Local country bank identifier (e.g. a UK sort code).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,

    /// Identifies the type of bank ID being used (e.g. `"GBDSC"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id_code: Option<String>,

    /// SWIFT BIC in either 8 or 11 character format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,

    /// Account number. Generated by the API when omitted, where supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// IBAN of the account. Generated by the API when omitted, where supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,

    /// Name of the account holder, up to four lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,

    /// Alternative primary account names, up to three lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_classification: Option<AccountClassification>,

    /// `true` if the account is held jointly by more than one party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,

    /// `true` if the holder has opted out of account matching (Confirmation of Payee).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,

    /// Additional information to identify the account, e.g. a building society roll number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_identification: Option<String>,

    /// `true` if the account has been switched away from this organisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switched: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined_information: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptance_qualifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_mask: Option<String>,
}

impl AccountAttributes {
    /// Creates attributes for `country` with every optional field unset.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}

/// Classification of the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountClassification {
    Personal,
    Business,
}

/// Lifecycle status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Submitted, awaiting confirmation.
    Pending,
    /// Active.
    Confirmed,
    /// No longer usable.
    Closed,
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC timestamp assigned by the API (`created_on`, `modified_on`).
///
/// Serialised as RFC 3339 with a `Z` suffix, the form the API emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_account_omits_server_assigned_fields() {
        let account = Account::new(
            AccountId::new_random(),
            OrganisationId::new_random(),
            AccountAttributes::new("GB"),
        );

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["type"], "accounts");
        assert!(value.get("version").is_none());
        assert!(value.get("created_on").is_none());
        assert_eq!(value["attributes"], json!({ "country": "GB" }));
    }

    #[test]
    fn decodes_server_response_with_unknown_fields() {
        let value = json!({
            "id": "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
            "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
            "type": "accounts",
            "version": 0,
            "created_on": "2021-03-04T10:15:30.123Z",
            "modified_on": "2021-03-04T10:15:30.123Z",
            "attributes": {
                "country": "GB",
                "base_currency": "GBP",
                "bank_id": "400300",
                "bank_id_code": "GBDSC",
                "bic": "NWBKGB22",
                "name": ["Samantha Holder"],
                "account_classification": "Personal",
                "status": "confirmed",
                "some_future_field": true
            }
        });

        let account: Account = serde_json::from_value(value).unwrap();
        assert_eq!(account.version, Some(AccountVersion::INITIAL));
        assert_eq!(account.attributes.status, Some(AccountStatus::Confirmed));
        assert_eq!(
            account.attributes.account_classification,
            Some(AccountClassification::Personal)
        );
        assert_eq!(account.attributes.name, vec!["Samantha Holder".to_string()]);
        assert!(account.created_on.is_some());
    }

    #[test]
    fn server_timestamps_survive_a_round_trip() {
        let value = json!({
            "id": "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
            "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
            "type": "accounts",
            "version": 1,
            "created_on": "2021-03-04T10:15:30.123Z",
            "modified_on": "2021-03-05T08:00:00Z",
            "attributes": { "country": "GB" }
        });

        let account: Account = serde_json::from_value(value).unwrap();
        let created_on = account.created_on.unwrap();
        let expected: DateTime<Utc> = "2021-03-04T10:15:30.123Z".parse().unwrap();
        assert_eq!(created_on.as_datetime(), expected);
        assert_eq!(created_on, Timestamp::from(expected));
        assert!(account.modified_on.unwrap() > created_on);

        let encoded = serde_json::to_value(&account).unwrap();
        assert_eq!(encoded["created_on"], "2021-03-04T10:15:30.123Z");
        assert_eq!(encoded["modified_on"], "2021-03-05T08:00:00Z");
    }

    #[test]
    fn missing_type_defaults_to_accounts() {
        let value = json!({
            "id": "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
            "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
            "attributes": { "country": "FR" }
        });

        let account: Account = serde_json::from_value(value).unwrap();
        assert_eq!(account.resource_type, ACCOUNT_RESOURCE_TYPE);
    }

    #[test]
    fn missing_country_is_a_decode_error() {
        let value = json!({
            "id": "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc",
            "organisation_id": "eb0bd6f5-c3f5-44b2-b677-acd23cdde73c",
            "attributes": {}
        });

        assert!(serde_json::from_value::<Account>(value).is_err());
    }
}
