//! Identifier override table.
//!
//! Some backends address a currency-on-network by a composite identifier
//! whose spelling their own metadata gets wrong or omits. This table pins the
//! known-good identifiers per backend so the resolver can answer from data
//! instead of guessing, and carries default-network policy for currencies
//! where the caller left the network unspecified.
//!
//! The table is immutable after construction and shared via `Arc`; sessions
//! compose a resolver around it rather than mutating any global state.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Key for an identifier override: backend, currency, network.
///
/// Backend ids are normalized to lowercase, currency and network codes to
/// uppercase, so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OverrideKey {
    backend: String,
    currency: String,
    network: String,
}

impl OverrideKey {
    fn new(backend: &str, currency: &str, network: &str) -> Self {
        Self {
            backend: backend.to_lowercase(),
            currency: currency.to_uppercase(),
            network: network.to_uppercase(),
        }
    }
}

/// One override entry as it appears in a JSON table file.
#[derive(Debug, Clone, Deserialize)]
struct OverrideEntry {
    backend: String,
    currency: String,
    network: String,
    identifier: String,
}

/// One default-network entry as it appears in a JSON table file.
#[derive(Debug, Clone, Deserialize)]
struct DefaultNetworkEntry {
    backend: String,
    currency: String,
    network: String,
}

#[derive(Debug, Clone, Deserialize)]
struct TableFile {
    #[serde(default)]
    overrides: Vec<OverrideEntry>,
    #[serde(default)]
    default_networks: Vec<DefaultNetworkEntry>,
}

/// Curated mapping of (backend, currency, network) to the composite
/// identifier that backend's withdrawal endpoint actually accepts.
///
/// # Example
///
/// ```rust
/// use unifex::overrides::IdentifierOverrideTable;
///
/// let table = IdentifierOverrideTable::builtin();
/// assert_eq!(
///     table.identifier("bitmart", "USDT", "TRC20"),
///     Some("USDT-TRX"),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdentifierOverrideTable {
    identifiers: HashMap<OverrideKey, String>,
    default_networks: HashMap<(String, String), String>,
}

impl IdentifierOverrideTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in table of identifiers verified against real
    /// backend behavior.
    ///
    /// BitMart's withdrawal endpoint keys USDT by chain-specific composite
    /// ids that differ from the `<currency>-<network>` spelling its currency
    /// metadata suggests.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("bitmart", "USDT", "BEP20", "USDT-BSC_BNB");
        table.insert("bitmart", "USDT", "TRC20", "USDT-TRX");
        table.insert("bitmart", "USDT", "ERC20", "USDT-ETH");
        table.insert_default_network("bitmart", "USDT", "TRC20");
        table
    }

    /// Parses a table from its JSON representation.
    ///
    /// # Format
    ///
    /// ```json
    /// {
    ///   "overrides": [
    ///     {"backend": "bitmart", "currency": "USDT", "network": "TRC20",
    ///      "identifier": "USDT-TRX"}
    ///   ],
    ///   "default_networks": [
    ///     {"backend": "bitmart", "currency": "USDT", "network": "TRC20"}
    ///   ]
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)
            .map_err(|e| Error::invalid_request(format!("invalid override table: {e}")))?;
        let mut table = Self::new();
        for entry in file.overrides {
            table.insert(
                &entry.backend,
                &entry.currency,
                &entry.network,
                &entry.identifier,
            );
        }
        for entry in file.default_networks {
            table.insert_default_network(&entry.backend, &entry.currency, &entry.network);
        }
        Ok(table)
    }

    /// Adds an identifier override. Later inserts for the same key win.
    pub fn insert(&mut self, backend: &str, currency: &str, network: &str, identifier: &str) {
        self.identifiers.insert(
            OverrideKey::new(backend, currency, network),
            identifier.to_string(),
        );
    }

    /// Adds a default-network policy entry for a (backend, currency) pair.
    pub fn insert_default_network(&mut self, backend: &str, currency: &str, network: &str) {
        self.default_networks.insert(
            (backend.to_lowercase(), currency.to_uppercase()),
            network.to_uppercase(),
        );
    }

    /// Looks up the override identifier for a (backend, currency, network).
    pub fn identifier(&self, backend: &str, currency: &str, network: &str) -> Option<&str> {
        self.identifiers
            .get(&OverrideKey::new(backend, currency, network))
            .map(String::as_str)
    }

    /// Looks up the default network for a (backend, currency) pair.
    pub fn default_network(&self, backend: &str, currency: &str) -> Option<&str> {
        self.default_networks
            .get(&(backend.to_lowercase(), currency.to_uppercase()))
            .map(String::as_str)
    }

    /// Number of identifier overrides in the table.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Returns `true` if the table holds no identifier overrides.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Wraps the table for sharing across sessions.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
