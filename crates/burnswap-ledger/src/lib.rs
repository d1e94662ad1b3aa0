//! # burnswap-ledger
//!
//! The **Asset Ledger Interface** the custodians dispatch to, a reference
//! in-memory FA2 ledger, and the transaction boundary that makes a sequence
//! of dispatches all-or-nothing.
//!
//! ## Architecture
//!
//! 1. **AssetLedger**: the transfer capability a ledger exposes
//! 2. **LedgerRegistry**: resolves an address to a ledger (or nothing)
//! 3. **Transaction**: stages copies of every touched ledger, dispatches in
//!    order, and swaps the copies back only on commit
//! 4. **Fa2Ledger**: balances, operator approvals, FA2 error codes
//! 5. **SupplyConservation**: minted totals per token, checked against balances
//!
//! ## Dispatch Flow
//!
//! ```text
//! TransferOperation → Transaction.dispatch() → registry.resolve()
//!     → staged AssetLedger.transfer() → ... → Transaction.commit()
//! ```
//!
//! Dropping a transaction without committing discards every staged change.

pub mod fa2;
pub mod ledger;
pub mod registry;
pub mod supply;
pub mod transaction;

pub use fa2::{Fa2Ledger, OperatorUpdate};
pub use ledger::AssetLedger;
pub use registry::LedgerRegistry;
pub use supply::SupplyConservation;
pub use transaction::Transaction;
