//! Currency/network identifier resolution.
//!
//! Turns a (currency, network) pair into the composite identifier a backend's
//! withdrawal endpoint expects. Resolution order: override table, then the
//! backend's own metadata mapping, then synthesis. The synthesized
//! `"<currency>-<network>"` spelling is a last-resort guess; verified quirks
//! belong in the [`IdentifierOverrideTable`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::overrides::IdentifierOverrideTable;
use crate::traits::Funding;

/// Resolves currency/network identifiers against an override table and a
/// backend's native mapping.
///
/// Cheap to clone; the override table is shared behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use unifex::overrides::IdentifierOverrideTable;
/// use unifex::resolver::NetworkCodeResolver;
///
/// let resolver = NetworkCodeResolver::new(IdentifierOverrideTable::builtin().into_shared());
/// let id = resolver.resolve(&backend, "USDT", Some("TRC20"))?;
/// assert_eq!(id, "USDT-TRX");
/// ```
#[derive(Debug, Clone)]
pub struct NetworkCodeResolver {
    overrides: Arc<IdentifierOverrideTable>,
}

impl NetworkCodeResolver {
    /// Creates a resolver over a shared override table.
    pub fn new(overrides: Arc<IdentifierOverrideTable>) -> Self {
        Self { overrides }
    }

    /// Creates a resolver over the built-in override data.
    pub fn with_builtin_overrides() -> Self {
        Self::new(IdentifierOverrideTable::builtin().into_shared())
    }

    /// The override table this resolver consults.
    pub fn overrides(&self) -> &Arc<IdentifierOverrideTable> {
        &self.overrides
    }

    /// Resolves the composite identifier for a currency on a network.
    ///
    /// Lookup order: default-network policy (when `network` is absent), then
    /// the override table, then the backend's [`currency_id`] mapping, then
    /// synthesis. A failing or unsupported backend mapping falls through to
    /// synthesis; the only error this method returns is
    /// [`Error::InvalidCurrency`] for an empty or blank currency code.
    ///
    /// The result is never empty for a non-empty currency.
    ///
    /// [`currency_id`]: crate::traits::Funding::currency_id
    pub fn resolve(
        &self,
        backend: &dyn Funding,
        currency: &str,
        network: Option<&str>,
    ) -> Result<String> {
        let currency = validate_currency(currency)?;
        let network = self.effective_network(backend.id(), &currency, network);

        if let Some(network) = network.as_deref() {
            if let Some(id) = self.overrides.identifier(backend.id(), &currency, network) {
                debug!(
                    backend = backend.id(),
                    %currency,
                    %network,
                    identifier = id,
                    "identifier resolved from override table"
                );
                return Ok(id.to_string());
            }
        }

        match backend.currency_id(&currency, network.as_deref()) {
            Ok(id) if !id.is_empty() => {
                debug!(
                    backend = backend.id(),
                    %currency,
                    network = network.as_deref().unwrap_or(""),
                    identifier = %id,
                    "identifier resolved by backend mapping"
                );
                Ok(id)
            }
            Ok(_) => {
                warn!(
                    backend = backend.id(),
                    %currency,
                    "backend mapping returned an empty identifier, synthesizing"
                );
                Ok(synthesize(&currency, network.as_deref()))
            }
            Err(err) => {
                if err.is_missing_value() {
                    warn!(
                        backend = backend.id(),
                        %currency,
                        error = %err,
                        "backend currency metadata is malformed, synthesizing"
                    );
                } else {
                    debug!(
                        backend = backend.id(),
                        %currency,
                        error = %err,
                        "backend mapping unavailable, synthesizing"
                    );
                }
                Ok(synthesize(&currency, network.as_deref()))
            }
        }
    }

    /// Resolves using the override table and synthesis only, skipping the
    /// backend's mapping.
    ///
    /// This is the fallback path for retrying a withdrawal whose first
    /// submission failed on a malformed backend-produced identifier; going
    /// back to the same broken mapping would reproduce the failure.
    pub fn resolve_offline(
        &self,
        backend_id: &str,
        currency: &str,
        network: Option<&str>,
    ) -> Result<String> {
        let currency = validate_currency(currency)?;
        let network = self.effective_network(backend_id, &currency, network);

        if let Some(network) = network.as_deref() {
            if let Some(id) = self.overrides.identifier(backend_id, &currency, network) {
                debug!(
                    backend = backend_id,
                    %currency,
                    %network,
                    identifier = id,
                    "identifier resolved offline from override table"
                );
                return Ok(id.to_string());
            }
        }

        Ok(synthesize(&currency, network.as_deref()))
    }

    fn effective_network(
        &self,
        backend_id: &str,
        currency: &str,
        network: Option<&str>,
    ) -> Option<String> {
        match network {
            Some(n) if !n.trim().is_empty() => Some(n.trim().to_uppercase()),
            _ => self
                .overrides
                .default_network(backend_id, currency)
                .map(str::to_string),
        }
    }
}

fn validate_currency(currency: &str) -> Result<String> {
    let trimmed = currency.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_currency("currency code is empty"));
    }
    Ok(trimmed.to_uppercase())
}

fn synthesize(currency: &str, network: Option<&str>) -> String {
    match network {
        Some(network) => format!("{currency}-{network}"),
        None => currency.to_string(),
    }
}
