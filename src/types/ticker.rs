//! Ticker type definition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current market snapshot for a trading pair.
///
/// Only the fields the uniform layer consumes are modeled; anything else a
/// backend returns rides along in `info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    /// Trading symbol (e.g. "BTC/USDT").
    pub symbol: String,
    /// Last traded price.
    pub last: Decimal,
    /// Best bid price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Decimal>,
    /// Best ask price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask: Option<Decimal>,
    /// 24h high.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<Decimal>,
    /// 24h low.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<Decimal>,
    /// 24h base volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
    /// Snapshot timestamp in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Raw backend response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

impl Ticker {
    /// Creates a ticker with just a symbol and last price.
    pub fn new(symbol: String, last: Decimal) -> Self {
        Self {
            symbol,
            last,
            bid: None,
            ask: None,
            high: None,
            low: None,
            volume: None,
            timestamp: None,
            info: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_creation() {
        let ticker = Ticker::new("BTC/USDT".to_string(), dec!(42000));
        assert_eq!(ticker.symbol, "BTC/USDT");
        assert_eq!(ticker.last, dec!(42000));
        assert!(ticker.bid.is_none());
    }
}
