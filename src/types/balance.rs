//! Balance type definitions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Balance of a single currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Funds available for trading or withdrawal.
    pub free: Decimal,
    /// Funds locked in open orders or pending operations.
    pub used: Decimal,
    /// Total funds (free + used).
    pub total: Decimal,
}

impl BalanceEntry {
    /// Creates a balance entry; `total` is derived from free + used.
    pub fn new(free: Decimal, used: Decimal) -> Self {
        Self {
            free,
            used,
            total: free + used,
        }
    }
}

/// Account balance snapshot across currencies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Balance {
    /// Per-currency balances, keyed by currency code.
    pub currencies: HashMap<String, BalanceEntry>,
    /// Snapshot timestamp in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Raw backend response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

impl Balance {
    /// Creates an empty balance snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for a currency, or a zero entry if absent.
    #[must_use]
    pub fn get(&self, currency: &str) -> BalanceEntry {
        self.currencies
            .get(currency)
            .copied()
            .unwrap_or_default()
    }

    /// Inserts an entry for a currency.
    pub fn set(&mut self, currency: impl Into<String>, entry: BalanceEntry) {
        self.currencies.insert(currency.into(), entry);
    }

    /// Returns the currencies holding a non-zero total, for display.
    #[must_use]
    pub fn non_zero(&self) -> Vec<(&str, &BalanceEntry)> {
        self.currencies
            .iter()
            .filter(|(_, e)| !e.total.is_zero())
            .map(|(c, e)| (c.as_str(), e))
            .collect()
    }
}
