//! Market data trait definition.
//!
//! Public price data, no authentication required.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Backend;
use crate::types::Ticker;

/// Trait for public market data access.
///
/// # Supertrait
///
/// Requires [`Backend`] for identity and capability metadata.
#[async_trait]
pub trait MarketData: Backend {
    /// Fetch the current ticker for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Trading symbol (e.g. "BTC/USDT")
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let ticker = backend.fetch_ticker("BTC/USDT").await?;
    /// println!("last: {}", ticker.last);
    /// ```
    async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker>;
}

/// Type alias for boxed MarketData trait object.
pub type BoxedMarketData = Box<dyn MarketData>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capabilities;
    use rust_decimal_macros::dec;

    struct MockBackend;

    impl Backend for MockBackend {
        fn id(&self) -> &str {
            "mock"
        }
        fn name(&self) -> &str {
            "Mock Backend"
        }
        fn capabilities(&self) -> Capabilities {
            Capabilities::FETCH_TICKER
        }
    }

    #[async_trait]
    impl MarketData for MockBackend {
        async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker> {
            Ok(Ticker::new(symbol.to_string(), dec!(42000)))
        }
    }

    #[test]
    fn test_trait_object_safety() {
        let _backend: BoxedMarketData = Box::new(MockBackend);
    }

    #[tokio::test]
    async fn test_fetch_ticker() {
        let backend = MockBackend;
        let ticker = backend.fetch_ticker("BTC/USDT").await.unwrap();
        assert_eq!(ticker.symbol, "BTC/USDT");
        assert_eq!(ticker.last, dec!(42000));
    }
}
