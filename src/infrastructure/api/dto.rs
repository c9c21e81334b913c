//! Alias service wire structures.
//!
//! The backend's alias shape has shifted across API revisions (`alias` vs
//! `address`, `forwardTo` vs `forwardingAddresses`, `isEnabled` vs a status
//! string). The records here accept both generations through serde aliases
//! and convert into the current domain shape.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, Alias, AliasId, AliasStatus, ForwardingAddress};

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    /// Account email.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Login response structure.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token, absent on malformed responses.
    #[serde(default)]
    pub token: Option<String>,
}

/// Structured error body returned by the backend.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from the backend.
    pub message: String,
}

/// Status field across schema revisions: a bool in the `isEnabled`
/// generation, a string in the current one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatusField {
    /// Legacy `isEnabled` flag.
    Flag(bool),
    /// Status name such as `"ACTIVE"`.
    Name(String),
}

/// Forwarding destination record.
#[derive(Debug, Deserialize)]
pub struct ForwardingRecord {
    /// Record identifier.
    pub id: i64,
    /// Destination address.
    #[serde(alias = "forwardingAddress")]
    pub address: String,
}

/// Alias record as returned by `GET /api/aliases`.
#[derive(Debug, Deserialize)]
pub struct AliasRecord {
    /// Alias identifier.
    pub id: i64,
    /// Alias address.
    #[serde(alias = "alias")]
    pub address: String,
    /// Forwarding destinations.
    #[serde(default, rename = "forwardingAddresses", alias = "forwardTo")]
    pub forwarding_addresses: Vec<ForwardingRecord>,
    /// Active/inactive status.
    #[serde(default, alias = "isEnabled")]
    pub status: Option<StatusField>,
}

/// Account record as returned by `GET /api/account`.
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    /// Account email.
    pub email: String,
}

impl From<StatusField> for AliasStatus {
    fn from(field: StatusField) -> Self {
        match field {
            StatusField::Flag(true) => Self::Active,
            StatusField::Flag(false) => Self::Inactive,
            StatusField::Name(name) => {
                if name.eq_ignore_ascii_case("active") {
                    Self::Active
                } else {
                    Self::Inactive
                }
            }
        }
    }
}

impl From<AliasRecord> for Alias {
    fn from(record: AliasRecord) -> Self {
        Self {
            id: AliasId(record.id),
            address: record.address,
            forwarding_addresses: record
                .forwarding_addresses
                .into_iter()
                .map(|fw| ForwardingAddress {
                    id: fw.id,
                    address: fw.address,
                })
                .collect(),
            status: record.status.map_or(AliasStatus::Active, Into::into),
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            email: record.email,
        }
    }
}
