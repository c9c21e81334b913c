//! Data fetch error type.

use thiserror::Error;

/// Failure while loading protected data.
///
/// Carries a single human-readable message, sourced preferentially from the
/// backend's structured error body and falling back to the transport error.
/// The message is display-only; no variant is retried or specially handled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Creates a fetch error from a display message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
