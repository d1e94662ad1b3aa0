//! Transfer model shared by the custodians and the asset ledgers.
//!
//! The wire shape mirrors the FA2 `transfer` entrypoint:
//! `[{ from_, txs: [{ to_, token_id, amount }] }]`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Address, Amount, TokenId};

/// One destination inside a [`TransferBatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferTx {
    #[serde(rename = "to_")]
    pub to: Address,
    pub token_id: TokenId,
    pub amount: Amount,
}

/// All moves out of a single owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBatch {
    #[serde(rename = "from_")]
    pub from: Address,
    pub txs: Vec<TransferTx>,
}

impl TransferBatch {
    /// A batch with exactly one move, which is all the custodians ever build.
    #[must_use]
    pub fn single(from: Address, to: Address, token_id: TokenId, amount: Amount) -> Self {
        Self {
            from,
            txs: vec![TransferTx {
                to,
                token_id,
                amount,
            }],
        }
    }
}

/// A unit move a ledger actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub token_id: TokenId,
    pub amount: Amount,
}

/// Which part of an operation a dispatch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    /// Collectible moved to the burn address.
    Burn,
    /// Reward units paid to the caller.
    Reward,
    /// Reward units drained by the operator.
    Withdraw,
    /// A plain ledger transfer submitted by an account, outside any custodian.
    Direct,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Burn => write!(f, "BURN"),
            Self::Reward => write!(f, "REWARD"),
            Self::Withdraw => write!(f, "WITHDRAW"),
            Self::Direct => write!(f, "DIRECT"),
        }
    }
}

/// A transfer instruction addressed to the ledger at `ledger`.
///
/// Custodians only build these; the host resolves `ledger` and dispatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOperation {
    pub leg: Leg,
    pub ledger: Address,
    pub batches: Vec<TransferBatch>,
}

/// A committed move, as recorded in an operation receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub leg: Leg,
    pub ledger: Address,
    pub from: Address,
    pub to: Address,
    pub token_id: TokenId,
    pub amount: Amount,
}

impl TransferEvent {
    #[must_use]
    pub fn new(leg: Leg, ledger: Address, transfer: Transfer) -> Self {
        Self {
            leg,
            ledger,
            from: transfer.from,
            to: transfer.to,
            token_id: transfer.token_id,
            amount: transfer.amount,
        }
    }
}
