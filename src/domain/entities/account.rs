//! Account entity.

use serde::{Deserialize, Serialize};

/// The authenticated user's account profile.
///
/// The backend currently exposes only the email; further fields arrive here
/// as the API grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Primary account email address.
    pub email: String,
}

impl Account {
    /// Creates a new account record.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
