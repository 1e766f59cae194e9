//! Secure credential types with automatic memory zeroization.
//!
//! API keys and secrets are cleared from memory when dropped, and their
//! `Debug`/`Display` output is redacted so they cannot leak through logs.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure string that is automatically zeroed when dropped.
///
/// Use this for API keys, secrets, passphrases, and other sensitive data.
///
/// # Example
///
/// ```rust
/// use unifex::credentials::SecretString;
///
/// let secret = SecretString::new("api-key-12345");
/// assert_eq!(secret.expose_secret(), "api-key-12345");
/// assert_eq!(format!("{:?}", secret), "[REDACTED]");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value.
    ///
    /// The explicit method name makes access points grep-able; avoid holding
    /// the returned reference longer than the call that needs it.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the secret in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expose_secret() {
        let secret = SecretString::new("my-api-key");
        assert_eq!(secret.expose_secret(), "my-api-key");
        assert_eq!(secret.len(), 10);
        assert!(!secret.is_empty());
    }

    #[test]
    fn test_debug_and_display_redacted() {
        let secret = SecretString::new("super-secret");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(format!("{secret}"), "[REDACTED]");
    }

    #[test]
    fn test_equality() {
        let a = SecretString::new("same");
        let b = SecretString::new("same");
        let c = SecretString::new("different");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
