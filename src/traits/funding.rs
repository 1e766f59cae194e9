//! Funding trait definition.
//!
//! Deposit addresses, withdrawals, and withdrawal history. These operations
//! require authentication.
//!
//! # Object Safety
//!
//! This trait is designed to be object-safe, allowing for dynamic dispatch via
//! trait objects (`dyn Funding`); the withdrawal orchestrator holds backends
//! this way.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::traits::Backend;
use crate::types::{DepositAddress, Transaction, WithdrawParams};

/// Trait for deposit and withdrawal operations.
///
/// # Supertrait
///
/// Requires [`Backend`] for identity and capability metadata.
///
/// # Identifier Mapping
///
/// Backends whose wire format addresses a currency-on-network by a single
/// composite identifier (rather than separate currency and network fields)
/// advertise [`Capabilities::CURRENCY_ID_MAPPING`] and implement
/// [`currency_id`](Funding::currency_id). The resolver in
/// [`resolver`](crate::resolver) consults it after the override table.
///
/// [`Capabilities::CURRENCY_ID_MAPPING`]: crate::capability::Capabilities::CURRENCY_ID_MAPPING
#[async_trait]
pub trait Funding: Backend {
    /// Fetch deposit address for a currency on the default network.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let address = backend.fetch_deposit_address("USDT").await?;
    /// println!("deposit to: {}", address.address);
    /// ```
    async fn fetch_deposit_address(&self, code: &str) -> Result<DepositAddress>;

    /// Fetch deposit address for a specific network.
    ///
    /// # Arguments
    ///
    /// * `code` - Currency code (e.g. "USDT")
    /// * `network` - Network code (e.g. "TRC20", "ERC20", "BEP20")
    async fn fetch_deposit_address_on_network(
        &self,
        code: &str,
        network: &str,
    ) -> Result<DepositAddress>;

    /// Withdraw funds to an external address.
    ///
    /// This is the raw submission path. Callers that want failure
    /// classification, the malformed-identifier retry, and duplicate guarding
    /// go through [`WithdrawalOrchestrator`](crate::withdrawal::WithdrawalOrchestrator)
    /// instead of calling this directly.
    async fn withdraw(&self, params: WithdrawParams) -> Result<Transaction>;

    /// Fetch withdrawal history.
    ///
    /// # Arguments
    ///
    /// * `code` - Optional currency code to filter by
    /// * `since` - Optional start timestamp in milliseconds
    /// * `limit` - Optional maximum number of records to return
    async fn fetch_withdrawals(
        &self,
        code: Option<&str>,
        since: Option<i64>,
        limit: Option<u32>,
    ) -> Result<Vec<Transaction>>;

    /// Map a currency code and optional network to this backend's composite
    /// currency identifier.
    ///
    /// Pure lookup against the backend's loaded currency metadata; no network
    /// round trip. The default implementation reports the capability as
    /// unsupported, which makes the resolver fall through to identifier
    /// synthesis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] with a missing-value cause when the backend's
    /// currency metadata lacks the fields the mapping needs. That failure
    /// class is exactly what the override table exists to paper over.
    fn currency_id(&self, code: &str, network: Option<&str>) -> Result<String> {
        let _ = network;
        Err(Error::not_supported(format!(
            "{}: no native currency id mapping for {code}",
            self.id()
        )))
    }
}

/// Type alias for boxed Funding trait object.
pub type BoxedFunding = Box<dyn Funding>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capabilities;
    use crate::types::{TransactionStatus, TransactionType};
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
            Capabilities::FUNDING_SET
        }
    }

    #[async_trait]
    impl Funding for MockBackend {
        async fn fetch_deposit_address(&self, code: &str) -> Result<DepositAddress> {
            Ok(DepositAddress::new(
                code.to_string(),
                "0x1234567890abcdef".to_string(),
            ))
        }

        async fn fetch_deposit_address_on_network(
            &self,
            code: &str,
            network: &str,
        ) -> Result<DepositAddress> {
            let mut address =
                DepositAddress::new(code.to_string(), "0x1234567890abcdef".to_string());
            address.network = Some(network.to_string());
            Ok(address)
        }

        async fn withdraw(&self, params: WithdrawParams) -> Result<Transaction> {
            Ok(Transaction::new(
                "withdraw_123".to_string(),
                TransactionType::Withdrawal,
                params.amount,
                params.currency,
                TransactionStatus::Pending,
            ))
        }

        async fn fetch_withdrawals(
            &self,
            code: Option<&str>,
            _since: Option<i64>,
            _limit: Option<u32>,
        ) -> Result<Vec<Transaction>> {
            let currency = code.unwrap_or("USDT").to_string();
            Ok(vec![Transaction::new(
                "withdraw_456".to_string(),
                TransactionType::Withdrawal,
                dec!(50),
                currency,
                TransactionStatus::Ok,
            )])
        }
    }

    #[test]
    fn test_trait_object_safety() {
        let _backend: BoxedFunding = Box::new(MockBackend);
    }

    #[tokio::test]
    async fn test_withdraw() {
        let backend = MockBackend;
        let tx = backend
            .withdraw(WithdrawParams::new("USDT", dec!(100), "TAddress123"))
            .await
            .unwrap();
        assert!(tx.is_withdrawal());
        assert!(tx.is_pending());
        assert_eq!(tx.amount, dec!(100));
    }

    #[tokio::test]
    async fn test_fetch_withdrawals() {
        let backend = MockBackend;
        let withdrawals = backend
            .fetch_withdrawals(Some("BTC"), None, Some(50))
            .await
            .unwrap();
        assert_eq!(withdrawals.len(), 1);
        assert_eq!(withdrawals[0].currency, "BTC");
    }

    #[test]
    fn test_default_currency_id_is_unsupported() {
        let backend = MockBackend;
        let err = backend.currency_id("USDT", Some("TRC20")).unwrap_err();
        assert!(matches!(err, Error::NotSupported(_)));
    }
}
