//! Transport-level error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Encapsulated transport errors hiding implementation details.
///
/// Backend clients wrap whatever HTTP/WebSocket failures they encounter in
/// this type so the public API never exposes a third-party error type.
///
/// Every variant of this enum leaves the submission state of an in-flight
/// request unknown: the request may or may not have reached the backend.
/// The withdrawal layer therefore classifies all of them as ambiguous and
/// never retries them automatically.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Request failed with an HTTP status code.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// DNS resolution failed.
    #[error("DNS resolution failed: {0}")]
    DnsResolution(String),

    /// SSL/TLS error.
    #[error("SSL/TLS error: {0}")]
    Ssl(String),

    /// Opaque transport error for underlying issues.
    /// Uses `Box<dyn StdError>` to hide implementation details while preserving the source.
    #[error("Transport error")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),
}
