//! Explicit execution context handed to a custodian for one operation.

use serde::{Deserialize, Serialize};

use crate::Address;

/// Who is calling, which contract is running, and at what level.
///
/// The host builds one per operation; custodians never look anywhere else
/// for the caller's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The account that submitted the operation.
    pub sender: Address,
    /// The running custodian's own address.
    pub self_address: Address,
    /// Sequence number of the operation being applied.
    pub level: u64,
}

impl CallContext {
    #[must_use]
    pub fn new(sender: Address, self_address: Address, level: u64) -> Self {
        Self {
            sender,
            self_address,
            level,
        }
    }
}
