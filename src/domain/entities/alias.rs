//! Email alias entity.

use serde::{Deserialize, Serialize};

/// Backend identifier of an alias record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasId(pub i64);

impl AliasId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AliasId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AliasId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Whether an alias currently forwards mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AliasStatus {
    /// Alias forwards incoming mail.
    #[default]
    Active,
    /// Alias is disabled and drops incoming mail.
    Inactive,
}

impl AliasStatus {
    /// Returns lowercase label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for AliasStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Destination an alias forwards to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingAddress {
    /// Backend identifier of the forwarding record.
    pub id: i64,
    /// Destination email address.
    pub address: String,
}

/// An email alias with its forwarding destinations.
///
/// Read-only on the client; the collection is sourced wholesale from the
/// backend on each view activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Alias identifier.
    pub id: AliasId,
    /// The alias email address itself.
    pub address: String,
    /// Ordered forwarding destinations.
    pub forwarding_addresses: Vec<ForwardingAddress>,
    /// Active/inactive status.
    pub status: AliasStatus,
}

impl Alias {
    /// Checks whether the alias address starts with the query,
    /// case-insensitively.
    #[must_use]
    pub fn matches_prefix(&self, query: &str) -> bool {
        self.address
            .to_lowercase()
            .starts_with(&query.to_lowercase())
    }
}
