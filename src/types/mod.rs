//! Uniform data types shared across all backends.
//!
//! Every backend adapter normalizes its raw responses into these shapes, so
//! callers never see backend-specific payloads except through the `info`
//! escape hatch each type carries.

pub mod balance;
pub mod order;
pub mod params;
pub mod ticker;
pub mod transaction;

pub use balance::{Balance, BalanceEntry};
pub use order::{Order, OrderSide, OrderStatus};
pub use params::{MarketOrderParams, OrderAmount, WithdrawParams};
pub use ticker::Ticker;
pub use transaction::{DepositAddress, Transaction, TransactionStatus, TransactionType};
