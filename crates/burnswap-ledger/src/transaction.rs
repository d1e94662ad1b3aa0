//! Staged, all-or-nothing dispatch of transfer operations.
//!
//! A [`Transaction`] borrows the registry mutably for its whole lifetime, so
//! nothing else can observe or change ledger state while it is open. Each
//! ledger touched by a dispatch is cloned into the staging area on first use
//! and every later dispatch in the same transaction sees the staged copy.
//!
//! - `commit` swaps the staged copies into the registry and returns the
//!   applied moves in dispatch order.
//! - Dropping the transaction (including via `?`) discards the staged copies,
//!   so a failed reward leg also discards an already-applied burn leg.

use std::collections::BTreeMap;

use burnswap_types::{Address, BurnswapError, Result, TransferEvent, TransferOperation};

use crate::{AssetLedger, LedgerRegistry};

/// One indivisible sequence of ledger dispatches.
pub struct Transaction<'a> {
    registry: &'a mut LedgerRegistry,
    staged: BTreeMap<Address, Box<dyn AssetLedger>>,
    events: Vec<TransferEvent>,
}

impl<'a> Transaction<'a> {
    #[must_use]
    pub fn begin(registry: &'a mut LedgerRegistry) -> Self {
        Self {
            registry,
            staged: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Dispatch one operation on behalf of `sender`.
    ///
    /// # Errors
    /// - `InvalidCollaborator` if `op.ledger` resolves to nothing
    /// - `LedgerRejected` if the ledger refuses the transfer
    pub fn dispatch(&mut self, sender: &Address, op: &TransferOperation) -> Result<()> {
        if !self.staged.contains_key(&op.ledger) {
            let base = self.registry.resolve(&op.ledger).ok_or_else(|| {
                BurnswapError::InvalidCollaborator {
                    address: op.ledger.clone(),
                }
            })?;
            self.staged.insert(op.ledger.clone(), base.box_clone());
        }
        let ledger = self
            .staged
            .get_mut(&op.ledger)
            .ok_or_else(|| BurnswapError::Internal(format!("ledger {} not staged", op.ledger)))?;

        let applied = ledger.transfer(sender, &op.batches).map_err(|reason| {
            BurnswapError::LedgerRejected {
                ledger: op.ledger.clone(),
                reason,
            }
        })?;

        tracing::debug!(
            leg = %op.leg,
            ledger = %op.ledger,
            sender = %sender,
            moves = applied.len(),
            "Transfer dispatched"
        );

        self.events.extend(
            applied
                .into_iter()
                .map(|t| TransferEvent::new(op.leg, op.ledger.clone(), t)),
        );
        Ok(())
    }

    /// Publish every staged ledger and return the applied moves.
    pub fn commit(self) -> Vec<TransferEvent> {
        let Self {
            registry,
            staged,
            events,
        } = self;
        for (address, ledger) in staged {
            registry.replace(address, ledger);
        }
        events
    }
}
