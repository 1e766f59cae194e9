//! Error detail structures for backend-reported failures.

use serde_json::Value;

#[cfg(feature = "backtrace")]
use std::backtrace::Backtrace;

/// Details for errors reported by a backend exchange API.
///
/// Extracted to a separate struct and boxed to keep the `Error` enum size
/// small. `code` is a `String` to support every backend's format (numeric,
/// alphanumeric, or absent).
///
/// # Example
///
/// ```rust
/// use unifex::error::BackendErrorDetails;
///
/// let details = BackendErrorDetails::new("60100", "Address is not verified");
/// assert_eq!(details.code, "60100");
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub struct BackendErrorDetails {
    /// Error code as reported by the backend.
    pub code: String,
    /// Descriptive message from the backend.
    pub message: String,
    /// Optional raw response data for debugging.
    pub data: Option<Value>,
    /// Backtrace captured at error creation (feature-gated).
    #[cfg(feature = "backtrace")]
    pub backtrace: Backtrace,
}

impl BackendErrorDetails {
    /// Creates a new `BackendErrorDetails` with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
            #[cfg(feature = "backtrace")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a new `BackendErrorDetails` with raw response data.
    pub fn with_data(code: impl Into<String>, message: impl Into<String>, data: Value) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: Some(data),
            #[cfg(feature = "backtrace")]
            backtrace: Backtrace::capture(),
        }
    }
}

impl std::fmt::Display for BackendErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)
    }
}
