//! Parsing-related error types.

use std::borrow::Cow;
use thiserror::Error;

/// Errors related to parsing backend responses and metadata.
///
/// The `MissingField` and `NullValue` variants matter beyond diagnostics:
/// they are the signature of the malformed-identifier defect, where a
/// backend's currency/network mapping holds no value for a required
/// sub-field. [`ParseError::is_missing_value`] identifies them.
///
/// # Example
///
/// ```rust
/// use unifex::error::{Error, ParseError, Result};
///
/// fn parse_price(json: &serde_json::Value) -> Result<f64> {
///     json.get("price")
///         .and_then(|v| v.as_f64())
///         .ok_or_else(|| Error::from(ParseError::missing_field("price")))
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// Failed to parse a decimal number.
    #[error("Failed to parse decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),

    /// Failed to deserialize JSON.
    #[error("Failed to deserialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required field in a response or metadata record.
    #[error("Missing required field: {0}")]
    MissingField(Cow<'static, str>),

    /// A required field was present but held a null value.
    #[error("Null value for required field: {0}")]
    NullValue(Cow<'static, str>),

    /// Invalid value for a field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: Cow<'static, str>,
        /// Error message
        message: Cow<'static, str>,
    },
}

impl ParseError {
    /// Creates a `MissingField` error with a static string (no allocation).
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(Cow::Borrowed(field))
    }

    /// Creates a `MissingField` error with a dynamic string.
    #[must_use]
    pub fn missing_field_owned(field: String) -> Self {
        Self::MissingField(Cow::Owned(field))
    }

    /// Creates a `NullValue` error.
    pub fn null_value(field: impl Into<Cow<'static, str>>) -> Self {
        Self::NullValue(field.into())
    }

    /// Creates an `InvalidValue` error.
    pub fn invalid_value(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this error signals an absent or null required
    /// value, the malformed-identifier failure class, as opposed to a
    /// value that was present but unparseable.
    #[must_use]
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::NullValue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_detection() {
        assert!(ParseError::missing_field("network_id").is_missing_value());
        assert!(ParseError::null_value("currency_id").is_missing_value());
        assert!(!ParseError::invalid_value("amount", "must be positive").is_missing_value());
    }

    #[test]
    fn test_display() {
        let err = ParseError::missing_field("network_id");
        assert_eq!(err.to_string(), "Missing required field: network_id");

        let err = ParseError::invalid_value("amount", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'amount': must be positive"
        );
    }
}
