//! Parameter types for the uniform operations, with builder support.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::order::OrderSide;

/// Parameters for withdrawing funds.
///
/// Built per user action and consumed exactly once by the withdrawal
/// orchestrator; never persisted. The `params` map carries raw
/// backend-specific parameters and is where the resolved currency/network
/// identifier is merged before submission.
///
/// # Example
///
/// ```rust
/// use unifex::types::params::WithdrawParams;
/// use rust_decimal_macros::dec;
///
/// let params = WithdrawParams::new("USDT", dec!(100), "0xD8dA6BF2...")
///     .network("BEP20")
///     .tag("memo123")
///     .idempotency_key("user-7/2026-08-27/1");
/// assert_eq!(params.network.as_deref(), Some("BEP20"));
/// ```
#[derive(Debug, Clone)]
pub struct WithdrawParams {
    /// Currency code to withdraw.
    pub currency: String,
    /// Amount to withdraw (must be positive).
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
    /// Address tag/memo (for certain chains).
    pub tag: Option<String>,
    /// Network code (e.g. "ERC20", "TRC20"); absent means caller-unspecified.
    pub network: Option<String>,
    /// Raw backend parameters merged into the outgoing request.
    pub params: BTreeMap<String, String>,
    /// Caller-supplied idempotency key. When absent, the destination address
    /// stands in, so duplicate submissions are always guarded.
    pub idempotency_key: Option<String>,
}

impl WithdrawParams {
    /// Creates new withdrawal parameters.
    pub fn new(currency: &str, amount: Decimal, address: &str) -> Self {
        Self {
            currency: currency.to_string(),
            amount,
            address: address.to_string(),
            tag: None,
            network: None,
            params: BTreeMap::new(),
            idempotency_key: None,
        }
    }

    /// Sets the address tag/memo.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Sets the network code.
    pub fn network(mut self, network: &str) -> Self {
        self.network = Some(network.to_string());
        self
    }

    /// Adds a raw backend parameter.
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the idempotency key.
    pub fn idempotency_key(mut self, key: &str) -> Self {
        self.idempotency_key = Some(key.to_string());
        self
    }
}

/// Amount specification for a market order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAmount {
    /// Exact amount in base currency.
    Exact(Decimal),
    /// Spend this amount of quote currency (market buys).
    QuoteCost(Decimal),
    /// Sell this percentage of current holdings, in (0, 100].
    /// Normalized against a balance snapshot fetched at order time.
    PercentageOfHoldings(Decimal),
}

/// Parameters for placing a market order.
///
/// # Example
///
/// ```rust
/// use unifex::types::params::{MarketOrderParams, OrderAmount};
/// use unifex::types::OrderSide;
/// use rust_decimal_macros::dec;
///
/// // Sell half of current holdings
/// let params = MarketOrderParams::new(
///     "BTC/USDT",
///     OrderSide::Sell,
///     OrderAmount::PercentageOfHoldings(dec!(50)),
/// );
/// assert_eq!(params.symbol, "BTC/USDT");
/// ```
#[derive(Debug, Clone)]
pub struct MarketOrderParams {
    /// Trading symbol (e.g. "BTC/USDT").
    pub symbol: String,
    /// Order side.
    pub side: OrderSide,
    /// Amount specification.
    pub amount: OrderAmount,
}

impl MarketOrderParams {
    /// Creates new market order parameters.
    pub fn new(symbol: &str, side: OrderSide, amount: OrderAmount) -> Self {
        Self {
            symbol: symbol.to_string(),
            side,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdraw_params_builder() {
        let params = WithdrawParams::new("USDT", dec!(100), "TAddress123")
            .network("TRC20")
            .tag("memo")
            .param("walletType", "0")
            .idempotency_key("k-1");

        assert_eq!(params.currency, "USDT");
        assert_eq!(params.amount, dec!(100));
        assert_eq!(params.address, "TAddress123");
        assert_eq!(params.network, Some("TRC20".to_string()));
        assert_eq!(params.tag, Some("memo".to_string()));
        assert_eq!(params.params.get("walletType"), Some(&"0".to_string()));
        assert_eq!(params.idempotency_key, Some("k-1".to_string()));
    }

    #[test]
    fn test_market_order_params() {
        let params = MarketOrderParams::new(
            "ETH/USDT",
            OrderSide::Buy,
            OrderAmount::QuoteCost(dec!(250)),
        );
        assert_eq!(params.side, OrderSide::Buy);
        assert_eq!(params.amount, OrderAmount::QuoteCost(dec!(250)));
    }
}
