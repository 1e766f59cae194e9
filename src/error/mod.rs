//! # Error handling
//!
//! Typed errors for the uniform exchange layer. The design follows a few
//! rules throughout the crate:
//!
//! 1. **Type safety**: strongly-typed errors via `thiserror`, with
//!    `#[non_exhaustive]` on public enums for forward compatibility.
//! 2. **Zero panic**: no `unwrap()` or `expect()` on recoverable paths.
//! 3. **Context rich**: full error chain support via [`Error::context`] and
//!    [`ContextExt`].
//! 4. **Compact**: large variants are boxed; string fields use
//!    `Cow<'static, str>` to avoid allocation for static messages.
//!
//! ## Error hierarchy
//!
//! ```text
//! Error
//! ├── Backend          - errors reported by a backend exchange API
//! ├── Network          - transport layer errors (via NetworkError)
//! ├── Parse            - response/metadata parsing errors (via ParseError)
//! ├── Authentication   - API key/signature errors
//! ├── InvalidCurrency  - structurally invalid caller-supplied currency
//! ├── InvalidRequest   - invalid parameters
//! ├── InsufficientBalance - not enough funds for the operation
//! ├── MarketNotFound   - unknown trading pair
//! ├── Timeout          - attempt deadline elapsed (submission state unknown)
//! ├── DuplicateInFlight - identical withdrawal already submitted
//! ├── NotSupported     - capability missing on this backend
//! └── Context          - error with additional context
//! ```
//!
//! How these map onto the withdrawal failure taxonomy (malformed identifier,
//! terminal business failure, ambiguous failure, unknown) is decided by the
//! classifier in [`crate::withdrawal`], not here: the same transport error is
//! retryable for a price lookup and forbidden to retry for a withdrawal.

mod context;
mod details;
mod network;
mod parse;

use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

pub use context::ContextExt;
pub use details::BackendErrorDetails;
pub use network::NetworkError;
pub use parse::ParseError;

/// Result type alias for all operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type for the uniform exchange layer.
///
/// Large variants are boxed to keep the enum small; static messages avoid
/// allocation through `Cow<'static, str>`.
///
/// # Example
///
/// ```rust
/// use unifex::error::Error;
///
/// let err = Error::invalid_currency("currency code must not be blank");
/// assert!(err.to_string().contains("blank"));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error reported by the backend exchange API.
    /// Boxed to reduce enum size (`BackendErrorDetails` is large).
    #[error("Backend error: {0}")]
    Backend(Box<BackendErrorDetails>),

    /// Transport-level errors. Boxed to reduce enum size.
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// Errors during response or metadata parsing. Boxed to reduce enum size.
    #[error("Parse error: {0}")]
    Parse(Box<ParseError>),

    /// Authentication errors (invalid API key, signature, passphrase).
    #[error("Authentication error: {0}")]
    Authentication(Cow<'static, str>),

    /// Caller-supplied currency code is structurally invalid (empty/blank).
    /// Fatal; never retried.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(Cow<'static, str>),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),

    /// Insufficient balance for an operation.
    #[error("Insufficient balance: {0}")]
    InsufficientBalance(Cow<'static, str>),

    /// Market symbol not found or not supported.
    #[error("Market not found: {0}")]
    MarketNotFound(Cow<'static, str>),

    /// Operation deadline elapsed. For a withdrawal submission this means
    /// the backend-side state is unknown.
    #[error("Timeout: {0}")]
    Timeout(Cow<'static, str>),

    /// An identical withdrawal is already in flight; the duplicate was
    /// rejected before any submission reached the backend.
    #[error("Duplicate withdrawal in flight: {0}")]
    DuplicateInFlight(Cow<'static, str>),

    /// Capability not supported by this backend.
    #[error("Not supported: {0}")]
    NotSupported(Cow<'static, str>),

    /// Error with additional context, preserving the error chain.
    #[error("{context}")]
    Context {
        /// Context message describing what operation failed
        context: String,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a new backend error.
    pub fn backend(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend(Box::new(BackendErrorDetails::new(code, message)))
    }

    /// Creates a new backend error with raw response data.
    pub fn backend_with_data(
        code: impl Into<String>,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self::Backend(Box::new(BackendErrorDetails::with_data(
            code, message, data,
        )))
    }

    /// Creates a network error from a message.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(Box::new(NetworkError::ConnectionFailed(msg.into())))
    }

    /// Creates an authentication error.
    /// Accepts both `&'static str` (zero allocation) and `String`.
    pub fn authentication(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Creates an invalid currency error.
    pub fn invalid_currency(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidCurrency(msg.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Creates an insufficient balance error.
    pub fn insufficient_balance(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InsufficientBalance(msg.into())
    }

    /// Creates a market not found error.
    pub fn market_not_found(symbol: impl Into<Cow<'static, str>>) -> Self {
        Self::MarketNotFound(symbol.into())
    }

    /// Creates a timeout error.
    pub fn timeout(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Creates a duplicate-in-flight error.
    pub fn duplicate_in_flight(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::DuplicateInFlight(msg.into())
    }

    /// Creates a not supported error.
    pub fn not_supported(feature: impl Into<Cow<'static, str>>) -> Self {
        Self::NotSupported(feature.into())
    }

    // ==================== Context Methods ====================

    /// Attaches context to an existing error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unifex::error::Error;
    ///
    /// let err = Error::network("connection refused")
    ///     .context("failed to fetch ticker for BTC/USDT");
    /// ```
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    // ==================== Chain Traversal Methods ====================

    /// Internal helper: creates an iterator that traverses the error chain.
    /// Automatically penetrates Context layers.
    fn iter_chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| match err {
            Error::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    /// Returns the root cause of the error, skipping Context layers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        self.iter_chain().last().unwrap_or(self)
    }

    /// Finds a specific error variant in the chain (penetrates Context layers).
    pub fn find_variant<F>(&self, matcher: F) -> Option<&Error>
    where
        F: Fn(&Error) -> bool,
    {
        self.iter_chain().find(|e| matcher(e))
    }

    /// Generates a detailed error report with the full chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unifex::error::Error;
    ///
    /// let err = Error::network("connection refused")
    ///     .context("failed to submit withdrawal");
    /// println!("{}", err.report());
    /// // failed to submit withdrawal
    /// // Caused by: Network error: Connection failed: connection refused
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        use std::fmt::Write;
        let mut report = String::new();
        report.push_str(&self.to_string());

        let mut current: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = current {
            let _ = write!(report, "\nCaused by: {err}");
            current = err.source();
        }
        report
    }

    // ==================== Helper Methods (Context Penetrating) ====================

    /// Checks if the root of this error is a parse failure for an absent or
    /// null required value, the malformed-identifier signature.
    #[must_use]
    pub fn is_missing_value(&self) -> bool {
        matches!(self.root_cause(), Error::Parse(p) if p.is_missing_value())
    }

    /// Checks if this is an invalid currency error (penetrates Context layers).
    #[must_use]
    pub fn as_invalid_currency(&self) -> Option<&str> {
        match self.root_cause() {
            Error::InvalidCurrency(msg) => Some(msg.as_ref()),
            _ => None,
        }
    }

    /// Checks if this is a duplicate-in-flight rejection (penetrates Context layers).
    #[must_use]
    pub fn is_duplicate_in_flight(&self) -> bool {
        matches!(self.root_cause(), Error::DuplicateInFlight(_))
    }
}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Self::Network(Box::new(err))
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(Box::new(err))
    }
}

impl From<BackendErrorDetails> for Error {
    fn from(details: BackendErrorDetails) -> Self {
        Self::Backend(Box::new(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_size() {
        // Boxing the large variants keeps the enum compact.
        assert!(std::mem::size_of::<Error>() <= 56);
    }

    #[test]
    fn test_backend_error_display() {
        let err = Error::backend("60100", "Address is not verified");
        let msg = err.to_string();
        assert!(msg.contains("Address is not verified"));
        assert!(msg.contains("60100"));
    }

    #[test]
    fn test_root_cause_through_context() {
        let err = Error::timeout("withdrawal attempt")
            .context("submitting to bitmart")
            .context("withdraw USDT");
        assert!(matches!(err.root_cause(), Error::Timeout(_)));
    }

    #[test]
    fn test_report_includes_chain() {
        let err = Error::network("connection refused").context("failed to submit");
        let report = err.report();
        assert!(report.starts_with("failed to submit"));
        assert!(report.contains("Caused by:"));
        assert!(report.contains("connection refused"));
    }

    #[test]
    fn test_missing_value_detection_through_context() {
        let err = Error::from(ParseError::null_value("network_id")).context("mapping USDT/BEP20");
        assert!(err.is_missing_value());

        let err = Error::from(ParseError::invalid_value("amount", "negative"));
        assert!(!err.is_missing_value());
    }

    #[test]
    fn test_invalid_currency_helper() {
        let err = Error::invalid_currency("blank").context("resolve");
        assert_eq!(err.as_invalid_currency(), Some("blank"));
        assert!(Error::timeout("t").as_invalid_currency().is_none());
    }

    #[test]
    fn test_from_conversions() {
        let err: Error = NetworkError::Timeout.into();
        assert!(matches!(err, Error::Network(_)));

        let err: Error = ParseError::missing_field("coin").into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
