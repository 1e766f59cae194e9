//! Order type definitions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy the base currency.
    Buy,
    /// Sell the base currency.
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted, not yet filled.
    Open,
    /// Fully filled.
    Closed,
    /// Canceled before completion.
    Canceled,
    /// Rejected by the backend.
    Rejected,
}

/// A placed order as reported back by a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Backend-assigned order ID.
    pub id: String,
    /// Trading symbol (e.g. "BTC/USDT").
    pub symbol: String,
    /// Order side.
    pub side: OrderSide,
    /// Filled or requested amount in base currency.
    pub amount: Decimal,
    /// Average fill price, when the backend reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Total cost in quote currency, when the backend reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    /// Order status.
    pub status: OrderStatus,
    /// Creation timestamp in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Raw backend response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

impl Order {
    /// Creates a new order record.
    pub fn new(
        id: String,
        symbol: String,
        side: OrderSide,
        amount: Decimal,
        status: OrderStatus,
    ) -> Self {
        Self {
            id,
            symbol,
            side,
            amount,
            price: None,
            cost: None,
            status,
            timestamp: None,
            info: None,
        }
    }

    /// Returns `true` if the order completed fully.
    pub fn is_closed(&self) -> bool {
        matches!(self.status, OrderStatus::Closed)
    }
}
