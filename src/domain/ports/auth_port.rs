//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::SessionToken;
use crate::domain::errors::AuthError;

/// Login credentials submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Port for backend authentication operations.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges credentials for a session token.
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock authentication port for testing.
    pub struct MockAuthPort {
        should_succeed: Arc<AtomicBool>,
        login_calls: Arc<AtomicUsize>,
    }

    impl MockAuthPort {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                login_calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Returns how many login calls were made.
        pub fn login_calls(&self) -> usize {
            self.login_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn login(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);

            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(SessionToken::new(format!("token-for-{}", credentials.email))
                    .expect("mock token is non-empty"))
            } else {
                Err(AuthError::rejected("mock rejection"))
            }
        }
    }
}
