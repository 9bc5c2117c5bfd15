//! Newtype domain identifiers.
//!
//! Every ledger concept that has an identity is represented as a distinct newtype
//! wrapping a primitive. This prevents accidentally interchanging an
//! [`AccountId`] with an [`OrganisationId`] even though both are UUIDs under the
//! hood.
//!
//! All identifiers serialise transparently, so they appear on the wire exactly
//! as the API expects them (`"ad27e265-9605-4b4b-a0e5-3003ea9cc4dc"`, `0`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for UUID-wrapped newtypes.
// Generates: struct, new_random(), from_uuid(), as_uuid(), Display, FromStr.
// ---------------------------------------------------------------------------
macro_rules! uuid_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a new random (v4) identifier.
            pub fn new_random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Returns the underlying [`Uuid`].
            pub fn as_uuid(self) -> Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers — UUID-backed
// ---------------------------------------------------------------------------

uuid_id! {
    /// Identifies an Account resource.
    ///
    /// Chosen by the client on creation; the API rejects duplicates.
    AccountId
}

uuid_id! {
    /// Identifies the organisation that owns an Account.
    OrganisationId
}

// ---------------------------------------------------------------------------
// Versions
// ---------------------------------------------------------------------------

/// Server-maintained version of a resource.
///
/// Incremented by the API on every modification. Deleting an account requires
/// the caller to pass the version it last observed; a freshly created account is
/// at version `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountVersion(u64);

impl AccountVersion {
    /// Version assigned to newly created accounts.
    pub const INITIAL: Self = Self(0);

    /// Creates a version from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AccountVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
