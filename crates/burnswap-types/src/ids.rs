//! Identifiers for committed operations.
//!
//! Receipt ids use UUIDv7 for time-ordered sorting. Operation hashes are
//! SHA-256 over a canonical encoding, so two hosts replaying the same
//! operations produce the same hashes.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{Address, TransferEvent, constants};

// ---------------------------------------------------------------------------
// ReceiptId
// ---------------------------------------------------------------------------

/// Unique identifier of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ReceiptId(pub Uuid);

impl ReceiptId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rcpt:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// OperationHash
// ---------------------------------------------------------------------------

/// Content hash of a committed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationHash(pub [u8; 32]);

impl OperationHash {
    /// Hash the level, the parties, the entry point, and every applied move
    /// in dispatch order.
    #[must_use]
    pub fn compute(
        level: u64,
        sender: &Address,
        destination: &Address,
        entrypoint: &str,
        events: &[TransferEvent],
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(constants::OPERATION_HASH_DOMAIN);
        hasher.update(level.to_le_bytes());
        hash_str(&mut hasher, sender.as_str());
        hash_str(&mut hasher, destination.as_str());
        hash_str(&mut hasher, entrypoint);
        hasher.update((events.len() as u64).to_le_bytes());
        for event in events {
            hash_str(&mut hasher, &event.leg.to_string());
            hash_str(&mut hasher, event.ledger.as_str());
            hash_str(&mut hasher, event.from.as_str());
            hash_str(&mut hasher, event.to.as_str());
            hasher.update(event.token_id.0.to_le_bytes());
            hasher.update(event.amount.to_le_bytes());
        }
        Self(hasher.finalize().into())
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

impl fmt::Display for OperationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op:{}", hex::encode(&self.0[..8]))
    }
}
