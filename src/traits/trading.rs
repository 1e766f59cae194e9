//! Trading trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Backend;
use crate::types::{MarketOrderParams, Order};

/// Trait for order placement.
///
/// Only market orders are modeled; the uniform layer trades at the current
/// price and leaves limit-order management to backend-specific code.
///
/// # Supertrait
///
/// Requires [`Backend`] for identity and capability metadata.
#[async_trait]
pub trait Trading: Backend {
    /// Place a market order.
    ///
    /// The `amount` in `params` must already be resolved to
    /// [`OrderAmount::Exact`](crate::types::OrderAmount::Exact) or
    /// [`OrderAmount::QuoteCost`](crate::types::OrderAmount::QuoteCost);
    /// percentage amounts are normalized by
    /// [`OrderExecutor`](crate::service::OrderExecutor) before reaching a
    /// backend.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use unifex::types::{MarketOrderParams, OrderAmount, OrderSide};
    /// use rust_decimal_macros::dec;
    ///
    /// let order = backend.create_market_order(MarketOrderParams::new(
    ///     "BTC/USDT",
    ///     OrderSide::Buy,
    ///     OrderAmount::QuoteCost(dec!(100)),
    /// )).await?;
    /// ```
    async fn create_market_order(&self, params: MarketOrderParams) -> Result<Order>;
}

/// Type alias for boxed Trading trait object.
pub type BoxedTrading = Box<dyn Trading>;
