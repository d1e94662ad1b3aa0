//! Address → ledger resolution.
//!
//! Resolution is fallible by construction: an address that was never
//! registered resolves to `None`, which callers surface as
//! [`burnswap_types::BurnswapError::InvalidCollaborator`].

use std::collections::BTreeMap;

use burnswap_types::{Address, BurnswapError, Result};

use crate::AssetLedger;

/// All ledgers known to a host, keyed by address.
#[derive(Default)]
pub struct LedgerRegistry {
    ledgers: BTreeMap<Address, Box<dyn AssetLedger>>,
}

impl LedgerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ledger under `address`.
    ///
    /// # Errors
    /// Returns [`BurnswapError::InvalidRequest`] if the address is taken.
    pub fn register(&mut self, address: Address, ledger: Box<dyn AssetLedger>) -> Result<()> {
        if self.ledgers.contains_key(&address) {
            return Err(BurnswapError::InvalidRequest {
                reason: format!("ledger {address} already registered"),
            });
        }
        tracing::debug!(ledger = %address, "Ledger registered");
        self.ledgers.insert(address, ledger);
        Ok(())
    }

    /// Resolve an address to its transfer capability.
    #[must_use]
    pub fn resolve(&self, address: &Address) -> Option<&dyn AssetLedger> {
        self.ledgers.get(address).map(Box::as_ref)
    }

    /// Typed read access, e.g. `registry.get::<Fa2Ledger>(&addr)`.
    #[must_use]
    pub fn get<L: AssetLedger + 'static>(&self, address: &Address) -> Option<&L> {
        self.ledgers.get(address)?.as_any().downcast_ref::<L>()
    }

    /// Typed write access for ledger-native entry points (mint, operators).
    pub fn get_mut<L: AssetLedger + 'static>(&mut self, address: &Address) -> Option<&mut L> {
        self.ledgers
            .get_mut(address)?
            .as_any_mut()
            .downcast_mut::<L>()
    }

    #[must_use]
    pub fn contains(&self, address: &Address) -> bool {
        self.ledgers.contains_key(address)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Swap in a committed copy. Only the transaction does this.
    pub(crate) fn replace(&mut self, address: Address, ledger: Box<dyn AssetLedger>) {
        self.ledgers.insert(address, ledger);
    }
}
