//! Unifex - uniform exchange layer with withdrawal recovery
//!
//! A capability-polymorphic abstraction over cryptocurrency exchange
//! backends, centered on the operation where exchange quirks hurt the most:
//! withdrawing funds. Backends plug in behind object-safe traits; the core
//! contributes identifier resolution with a curated override table, failure
//! classification, a single disciplined fallback retry for malformed
//! currency/network identifiers, and duplicate-submission guarding.
//!
//! # Features
//!
//! - **Type Safety**: Leverages Rust's type system for compile-time guarantees
//! - **Precision**: Uses `rust_decimal::Decimal` for accurate financial calculations
//! - **Async/Await**: Built on tokio for high-performance async operations
//! - **Error Handling**: Comprehensive error types with `thiserror`
//!
//! # Example
//!
//! ```rust,no_run
//! use unifex::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! # async fn example(backend: &dyn Funding) -> Result<()> {
//! let orchestrator = WithdrawalOrchestrator::with_builtin_overrides();
//! let result = orchestrator
//!     .withdraw(
//!         backend,
//!         WithdrawParams::new("USDT", dec!(100), "TAddress...").network("TRC20"),
//!     )
//!     .await?;
//!
//! if result.succeeded() {
//!     println!("accepted after {} attempt(s)", result.attempts);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// =============================================================================
// Global Clippy Lint Suppressions
// =============================================================================
// These lints are suppressed globally because they apply broadly across the
// codebase and would require excessive local annotations.
//
// - module_name_repetitions: Common pattern in Rust libraries (e.g., OrderSide in order module)
// - missing_errors_doc: Too verbose to document every Result-returning function
// - missing_panics_doc: Too verbose to document every potential panic
// - must_use_candidate: Not all return values need #[must_use]
// - doc_markdown: Technical terms in docs don't need backticks (e.g., USDT, TRC20)
// - similar_names: Trading terminology requires similar names (bid/ask, buy/sell)
// - return_self_not_must_use: Builder pattern methods return Self without must_use
// =============================================================================
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::return_self_not_must_use)]

// Re-exports of external dependencies
pub use rust_decimal;
pub use serde;
pub use serde_json;

// Core modules
pub mod capability;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod overrides;
pub mod resolver;
pub mod service;
/// Backend trait hierarchy for modular capability composition
pub mod traits;
pub mod types;
pub mod withdrawal;

// Re-exports of core types for convenience
pub use capability::Capabilities;
pub use config::{BackendConfig, BackendConfigBuilder};
pub use credentials::SecretString;
pub use error::{Error, Result};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use overrides::IdentifierOverrideTable;
pub use resolver::NetworkCodeResolver;
pub use service::{OrderExecutor, QuoteBalanceService};
pub use withdrawal::{
    FailureKind, OrchestratorConfig, WithdrawalOrchestrator, WithdrawalResult, WithdrawalStatus,
};

/// Convenience re-exports for common usage.
///
/// ```rust
/// use unifex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::Capabilities;
    pub use crate::config::BackendConfig;
    pub use crate::error::{ContextExt, Error, Result};
    pub use crate::overrides::IdentifierOverrideTable;
    pub use crate::resolver::NetworkCodeResolver;
    pub use crate::service::{OrderExecutor, QuoteBalanceService};
    pub use crate::traits::{
        Account, ArcFunding, Backend, FullBackend, Funding, MarketData, Trading,
    };
    pub use crate::types::{
        Balance, BalanceEntry, DepositAddress, MarketOrderParams, Order, OrderAmount, OrderSide,
        OrderStatus, Ticker, Transaction, TransactionStatus, TransactionType, WithdrawParams,
    };
    pub use crate::withdrawal::{
        FailureKind, OrchestratorConfig, WithdrawalOrchestrator, WithdrawalResult,
        WithdrawalStatus,
    };
}
