//! Session bearer token value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Bearer token identifying an authenticated session.
///
/// The token is opaque to the client; the backend issues it on login and the
/// client attaches it to every protected request. The token value doubles as
/// the session identity key for fetch gating.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Creates a token, rejecting empty or whitespace-only values.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return None;
        }

        Some(Self { value })
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        let char_count = self.value.chars().count();

        if char_count <= 8 {
            return "*".repeat(char_count);
        }

        let visible_prefix: String = self.value.chars().take(4).collect();
        format!("{visible_prefix}...")
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token_creation() {
        let token = SessionToken::new("eyJhbGciOiJIUzI1NiJ9.payload.sig");
        assert!(token.is_some());
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("   ").is_none());
    }

    #[test]
    fn test_token_is_trimmed() {
        let token = SessionToken::new("  abc123defg  ").unwrap();
        assert_eq!(token.as_str(), "abc123defg");
    }

    #[test]
    fn test_token_masking() {
        let token = SessionToken::new("eyJhbGciOiJIUzI1NiJ9.payload.sig").unwrap();
        let masked = token.masked();

        assert!(masked.ends_with("..."));
        assert!(masked.len() < token.as_str().len());
    }

    #[test]
    fn test_masking_multibyte_token() {
        let token = SessionToken::new("ütoken-with-multibyte-head").unwrap();
        assert_eq!(token.masked(), "ütok...");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = SessionToken::new("super-secret-session-token").unwrap();
        let debug_output = format!("{token:?}");

        assert!(!debug_output.contains("super-secret-session-token"));
    }
}
