//! Operation receipts for the Burnswap journal.
//!
//! Every committed operation produces one [`OperationReceipt`] listing the
//! moves it applied, in dispatch order. Rejected operations produce nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, Leg, OperationHash, ReceiptId, TransferEvent};

/// Journal entry for one committed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationReceipt {
    pub id: ReceiptId,
    /// Content hash over level, parties, entry point, and events.
    pub hash: OperationHash,
    pub level: u64,
    pub sender: Address,
    /// Custodian or ledger the operation was addressed to.
    pub destination: Address,
    pub entrypoint: String,
    /// Moves applied, burn leg first.
    pub events: Vec<TransferEvent>,
    pub applied_at: DateTime<Utc>,
}

impl OperationReceipt {
    #[must_use]
    pub fn new(
        level: u64,
        sender: Address,
        destination: Address,
        entrypoint: &str,
        events: Vec<TransferEvent>,
    ) -> Self {
        let hash = OperationHash::compute(level, &sender, &destination, entrypoint, &events);
        Self {
            id: ReceiptId::new(),
            hash,
            level,
            sender,
            destination,
            entrypoint: entrypoint.to_string(),
            events,
            applied_at: Utc::now(),
        }
    }

    /// Events belonging to one leg.
    pub fn leg(&self, leg: Leg) -> impl Iterator<Item = &TransferEvent> {
        self.events.iter().filter(move |e| e.leg == leg)
    }

    /// Recompute the hash and compare it to the stored one.
    #[must_use]
    pub fn verify_hash(&self) -> bool {
        OperationHash::compute(
            self.level,
            &self.sender,
            &self.destination,
            &self.entrypoint,
            &self.events,
        ) == self.hash
    }
}
