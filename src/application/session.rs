//! Session state management.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::entities::SessionToken;
use crate::domain::ports::{AuthPort, Credentials, TokenStoragePort};

/// Owner of the process-wide session state.
///
/// Holds at most one bearer token. The token is seeded once at startup from
/// durable storage and afterwards mutated only through [`login`] and
/// [`logout`]. A present token is treated as authenticated for routing; there
/// is no expiry or refresh - a stale token surfaces later as a fetch error.
///
/// [`login`]: SessionStore::login
/// [`logout`]: SessionStore::logout
pub struct SessionStore {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn TokenStoragePort>,
    token: RwLock<Option<SessionToken>>,
}

impl SessionStore {
    /// Creates a store with no active session.
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self {
            auth_port,
            storage_port,
            token: RwLock::new(None),
        }
    }

    /// Seeds the session from durable storage.
    ///
    /// Returns whether a stored token was found. Storage errors leave the
    /// session absent.
    pub async fn init_from_storage(&self) -> bool {
        match self.storage_port.get_token().await {
            Ok(Some(token)) => {
                debug!("Session seeded from stored token");
                *self.token.write() = Some(token);
                true
            }
            Ok(None) => {
                debug!("No stored token found");
                false
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored token");
                false
            }
        }
    }

    /// Attempts to authenticate with the backend.
    ///
    /// On a token-bearing response the token is stored in memory and durable
    /// storage and `true` is returned. Any failure returns `false` with no
    /// partial state; a durable-storage write failure alone does not fail the
    /// login.
    pub async fn login(&self, credentials: Credentials) -> bool {
        debug!(email = %credentials.email, "Attempting login");

        let token = match self.auth_port.login(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Login failed");
                return false;
            }
        };

        *self.token.write() = Some(token.clone());

        if let Err(e) = self.storage_port.store_token(&token).await {
            error!(error = %e, "Failed to persist session token");
        }

        info!("Login successful");
        true
    }

    /// Clears the session and durable storage. Idempotent.
    pub async fn logout(&self) {
        *self.token.write() = None;

        if let Err(e) = self.storage_port.delete_token().await {
            error!(error = %e, "Failed to delete stored token");
        }

        info!("Logged out");
    }

    /// Returns the current session token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        self.token.read().clone()
    }

    /// Returns whether a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}
