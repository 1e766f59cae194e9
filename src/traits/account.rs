//! Account trait definition.
//!
//! Balance access for authenticated backends. Balance snapshots are never
//! cached here; callers that need a fresh view fetch one at decision time.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Backend;
use crate::types::{Balance, BalanceEntry};

/// Trait for account balance operations.
///
/// # Supertrait
///
/// Requires [`Backend`] for identity and capability metadata.
#[async_trait]
pub trait Account: Backend {
    /// Fetch the full account balance.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let balance = backend.fetch_balance().await?;
    /// let usdt = balance.get("USDT");
    /// println!("free USDT: {}", usdt.free);
    /// ```
    async fn fetch_balance(&self) -> Result<Balance>;

    /// Fetch the balance entry for a single currency.
    ///
    /// Fetches a fresh full snapshot and projects the requested currency;
    /// a currency the account does not hold yields a zero entry.
    async fn get_balance(&self, currency: &str) -> Result<BalanceEntry> {
        let balance = self.fetch_balance().await?;
        Ok(balance.get(currency))
    }
}

/// Type alias for boxed Account trait object.
pub type BoxedAccount = Box<dyn Account>;
