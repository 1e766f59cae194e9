//! Backend capability flags.
//!
//! The core depends on backends only through a small capability surface:
//! price lookup, balance lookup, order placement, deposit-address lookup,
//! withdrawal, withdrawal-history lookup, and the currency/network
//! identifier mapping. Capabilities are stored as bitflags for compact
//! storage and fast set operations.
//!
//! # Example
//!
//! ```rust
//! use unifex::capability::Capabilities;
//!
//! let caps = Capabilities::TRADING_SET;
//! assert!(caps.contains(Capabilities::FETCH_TICKER));
//! assert!(!caps.contains(Capabilities::WITHDRAW));
//!
//! let full = Capabilities::all_known();
//! assert!(full.contains(Capabilities::CURRENCY_ID_MAPPING));
//! ```

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Capability set of a backend exchange client.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u16 {
        /// Fetch the current ticker for a symbol (price lookup).
        const FETCH_TICKER        = 1 << 0;
        /// Fetch account balances.
        const FETCH_BALANCE       = 1 << 1;
        /// Place a market order.
        const CREATE_MARKET_ORDER = 1 << 2;
        /// Fetch a deposit address for a currency/network.
        const FETCH_DEPOSIT_ADDRESS = 1 << 3;
        /// Submit a withdrawal.
        const WITHDRAW            = 1 << 4;
        /// Fetch withdrawal history.
        const FETCH_WITHDRAWALS   = 1 << 5;
        /// Map (currency, network) to the backend-specific identifier.
        const CURRENCY_ID_MAPPING = 1 << 6;

        /// Capabilities needed for the price/balance/order pass-throughs.
        const TRADING_SET = Self::FETCH_TICKER.bits()
            | Self::FETCH_BALANCE.bits()
            | Self::CREATE_MARKET_ORDER.bits();

        /// Capabilities needed for the withdrawal flow.
        const FUNDING_SET = Self::FETCH_DEPOSIT_ADDRESS.bits()
            | Self::WITHDRAW.bits()
            | Self::FETCH_WITHDRAWALS.bits()
            | Self::CURRENCY_ID_MAPPING.bits();
    }
}

impl Capabilities {
    /// Returns the set of every known capability.
    #[must_use]
    pub fn all_known() -> Self {
        Self::TRADING_SET | Self::FUNDING_SET
    }

    /// Looks up a capability by its camelCase name, as used in capability
    /// metadata across exchange APIs.
    #[must_use]
    pub fn from_camel_name(name: &str) -> Option<Self> {
        match name {
            "fetchTicker" => Some(Self::FETCH_TICKER),
            "fetchBalance" => Some(Self::FETCH_BALANCE),
            "createMarketOrder" => Some(Self::CREATE_MARKET_ORDER),
            "fetchDepositAddress" => Some(Self::FETCH_DEPOSIT_ADDRESS),
            "withdraw" => Some(Self::WITHDRAW),
            "fetchWithdrawals" => Some(Self::FETCH_WITHDRAWALS),
            "currencyIdMapping" => Some(Self::CURRENCY_ID_MAPPING),
            _ => None,
        }
    }

    /// Checks whether a capability, named in camelCase, is present.
    /// Unknown names are reported as unsupported rather than an error.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        Self::from_camel_name(name).is_some_and(|cap| self.contains(cap))
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
