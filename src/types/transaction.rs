//! Transaction and deposit address types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction type for deposits and withdrawals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Deposit to an exchange account.
    Deposit,
    /// Withdrawal from an exchange account.
    Withdrawal,
}

/// Transaction processing status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Pending confirmation.
    Pending,
    /// Successfully completed.
    Ok,
    /// Failed to process.
    Failed,
    /// Canceled by user or exchange.
    Canceled,
}

/// Transaction record for deposits and withdrawals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Backend-assigned transaction ID.
    pub id: String,
    /// Blockchain transaction hash, once available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// Transaction type (deposit or withdrawal).
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Transaction amount.
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Network or chain code (e.g. "ERC20", "TRC20").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Address memo or tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Transaction status.
    pub status: TransactionStatus,
    /// Transaction timestamp in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Raw backend response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

impl Transaction {
    /// Creates a new transaction record.
    pub fn new(
        id: String,
        transaction_type: TransactionType,
        amount: Decimal,
        currency: String,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id,
            txid: None,
            transaction_type,
            amount,
            currency,
            network: None,
            address: None,
            tag: None,
            status,
            timestamp: None,
            info: None,
        }
    }

    /// Returns `true` if this is a withdrawal transaction.
    pub fn is_withdrawal(&self) -> bool {
        matches!(self.transaction_type, TransactionType::Withdrawal)
    }

    /// Returns `true` if this is a deposit transaction.
    pub fn is_deposit(&self) -> bool {
        matches!(self.transaction_type, TransactionType::Deposit)
    }

    /// Returns `true` if the transaction completed successfully.
    pub fn is_completed(&self) -> bool {
        matches!(self.status, TransactionStatus::Ok)
    }

    /// Returns `true` if the transaction is pending confirmation.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, TransactionStatus::Pending)
    }
}

/// Deposit address information for receiving funds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositAddress {
    /// Currency code.
    pub currency: String,
    /// Network or chain code (e.g. "ERC20", "TRC20").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Deposit address.
    pub address: String,
    /// Address memo or tag (required for some currencies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Raw backend response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
}

impl DepositAddress {
    /// Creates a new deposit address.
    pub fn new(currency: String, address: String) -> Self {
        Self {
            currency,
            network: None,
            address,
            tag: None,
            info: None,
        }
    }

    /// Returns the full address string including tag if present.
    pub fn full_address(&self) -> String {
        if let Some(tag) = &self.tag {
            format!("{}:{}", self.address, tag)
        } else {
            self.address.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transaction_creation() {
        let tx = Transaction::new(
            "w-1".to_string(),
            TransactionType::Withdrawal,
            dec!(50),
            "USDT".to_string(),
            TransactionStatus::Pending,
        );
        assert!(tx.is_withdrawal());
        assert!(tx.is_pending());
        assert!(!tx.is_completed());
    }

    #[test]
    fn test_deposit_address_with_tag() {
        let mut address = DepositAddress::new(
            "XRP".to_string(),
            "rEb8TK3gBgk5auZkwc6sHnwrGVJH8DuaLh".to_string(),
        );
        assert_eq!(address.full_address(), address.address);
        address.tag = Some("108618262".to_string());
        assert_eq!(
            address.full_address(),
            "rEb8TK3gBgk5auZkwc6sHnwrGVJH8DuaLh:108618262"
        );
    }
}
