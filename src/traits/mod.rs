//! Backend trait hierarchy for modular capability composition.
//!
//! Backends implement only the capability traits they support, without stub
//! implementations for the rest.
//!
//! # Trait Hierarchy
//!
//! ```text
//! Backend (base trait - identity, capabilities)
//!     │
//!     ├── MarketData (public tickers)
//!     ├── Trading (market orders)
//!     ├── Account (balances)
//!     └── Funding (deposit addresses, withdrawals, identifier mapping)
//!
//! FullBackend = Backend + MarketData + Trading + Account + Funding
//! ```
//!
//! # Object Safety
//!
//! All traits are object-safe; the orchestrator and services hold backends
//! as `Arc<dyn Funding>` and friends for dynamic dispatch.
//!
//! # Thread Safety
//!
//! All traits require `Send + Sync` bounds for async runtime compatibility.

use std::sync::Arc;

mod account;
mod backend;
mod funding;
mod market_data;
mod trading;

pub use account::{Account, BoxedAccount};
pub use backend::{Backend, BoxedBackend};
pub use funding::{BoxedFunding, Funding};
pub use market_data::{BoxedMarketData, MarketData};
pub use trading::{BoxedTrading, Trading};

/// Combined trait for backends supporting every capability.
///
/// Automatically implemented for any type that implements all component
/// traits.
pub trait FullBackend: Backend + MarketData + Trading + Account + Funding {}

impl<T> FullBackend for T where T: Backend + MarketData + Trading + Account + Funding {}

/// Type alias for boxed FullBackend trait object.
pub type BoxedFullBackend = Box<dyn FullBackend>;

/// Type alias for Arc-wrapped FullBackend trait object, for sharing one
/// backend across tasks.
pub type ArcFullBackend = Arc<dyn FullBackend>;

/// Type alias for Arc-wrapped MarketData trait object.
pub type ArcMarketData = Arc<dyn MarketData>;

/// Type alias for Arc-wrapped Trading trait object.
pub type ArcTrading = Arc<dyn Trading>;

/// Type alias for Arc-wrapped Account trait object.
pub type ArcAccount = Arc<dyn Account>;

/// Type alias for Arc-wrapped Funding trait object.
pub type ArcFunding = Arc<dyn Funding>;
