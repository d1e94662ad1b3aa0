//! The transfer capability every asset ledger exposes.

use std::any::Any;

use burnswap_types::{Address, Amount, LedgerError, TokenId, Transfer, TransferBatch};

/// An external asset ledger as seen by the custodians.
///
/// `transfer` must be all-or-nothing: on `Err` the ledger is unchanged.
/// `box_clone` lets a [`crate::Transaction`] stage a private copy so that a
/// later failure in the same operation can discard this ledger's changes too.
pub trait AssetLedger: Send {
    /// Apply `batches` on behalf of `sender` (the account invoking the ledger).
    fn transfer(
        &mut self,
        sender: &Address,
        batches: &[TransferBatch],
    ) -> std::result::Result<Vec<Transfer>, LedgerError>;

    fn balance_of(&self, owner: &Address, token_id: TokenId) -> Amount;

    fn box_clone(&self) -> Box<dyn AssetLedger>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
