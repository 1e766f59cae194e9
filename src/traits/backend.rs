//! Base backend trait definition.

use crate::capability::Capabilities;

/// Base trait carrying backend identity and capability metadata.
///
/// Every capability trait in the hierarchy requires `Backend` as a supertrait,
/// so any trait object in the system can report which backend produced it and
/// which operations that backend supports.
///
/// # Thread Safety
///
/// Requires `Send + Sync` so implementations can be shared across async tasks.
pub trait Backend: Send + Sync {
    /// Stable lowercase backend identifier (e.g. "bitmart").
    fn id(&self) -> &str;

    /// Human-readable backend name (e.g. "BitMart").
    fn name(&self) -> &str;

    /// Capability flags advertised by this backend.
    fn capabilities(&self) -> Capabilities;

    /// Returns `true` if this backend advertises the given capability.
    fn has_capability(&self, capability: Capabilities) -> bool {
        self.capabilities().contains(capability)
    }
}

/// Type alias for boxed Backend trait object.
pub type BoxedBackend = Box<dyn Backend>;

#[cfg(test)]
mod tests {
    use super::*;

    struct MockBackend;

    impl Backend for MockBackend {
        fn id(&self) -> &str {
            "mock"
        }
        fn name(&self) -> &str {
            "Mock Backend"
        }
        fn capabilities(&self) -> Capabilities {
            Capabilities::FETCH_TICKER | Capabilities::WITHDRAW
        }
    }

    #[test]
    fn test_trait_object_safety() {
        let _backend: BoxedBackend = Box::new(MockBackend);
    }

    #[test]
    fn test_has_capability() {
        let backend = MockBackend;
        assert!(backend.has_capability(Capabilities::WITHDRAW));
        assert!(!backend.has_capability(Capabilities::CREATE_MARKET_ORDER));
    }
}
