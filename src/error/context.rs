//! Context attachment for `Result` chains.

use super::Result;

/// Extension trait for attaching context to `Result` values.
///
/// # Example
///
/// ```rust
/// use unifex::error::{Error, Result, ContextExt};
///
/// fn submit(id: &str) -> Result<()> {
///     Err(Error::network("connection refused"))
/// }
///
/// fn run() -> Result<()> {
///     submit("w-1").with_context(|| format!("failed to submit withdrawal {}", "w-1"))
/// }
/// ```
pub trait ContextExt<T> {
    /// Attaches a static context message to the error, if any.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Attaches a lazily-built context message to the error, if any.
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> ContextExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| e.context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_context_attaches_message() {
        let result: Result<()> = Err(Error::network("refused"));
        let err = result.context("fetching ticker").unwrap_err();
        assert!(err.to_string().contains("fetching ticker"));
        assert!(err.report().contains("refused"));
    }

    #[test]
    fn test_with_context_lazy() {
        let result: Result<()> = Ok(());
        // The closure must not run on the Ok path.
        let result = result.with_context(|| -> String { panic!("should not be called") });
        assert!(result.is_ok());
    }
}
