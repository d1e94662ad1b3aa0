//! Entry point parameters accepted by the custodians.
//!
//! None of the action requests carries a recipient: the reward always goes
//! to the operation's sender, read from the [`crate::CallContext`].

use serde::{Deserialize, Serialize};

use crate::{Address, Amount, TokenId};

/// Pull-style burn: the caller's own collectible is moved to the burn
/// address by the custodian, which must be an approved operator for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRequest {
    /// Ledger holding the collectible.
    pub nft_contract: Address,
    pub token_id: TokenId,
    /// Editions to burn.
    pub amount: Amount,
    /// Reward units to pay, computed off-chain.
    pub reward_amount: Amount,
}

/// Push-style burn: the collectible was already transferred to the custodian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositedBurnRequest {
    pub nft_contract: Address,
    pub token_id: TokenId,
}

/// Operator drain of the custodian's reward balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub recipient: Address,
    pub amount: Amount,
}

/// Every entry point a custodian may expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entrypoint", content = "params", rename_all = "snake_case")]
pub enum Entrypoint {
    BurnAndReward(BurnRequest),
    BurnForReward(DepositedBurnRequest),
    SetPaused(bool),
    UpdateOperator(Address),
    Withdraw(WithdrawRequest),
}

impl Entrypoint {
    /// The entry point name as it appears in receipts and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BurnAndReward(_) => "burn_and_reward",
            Self::BurnForReward(_) => "burn_for_reward",
            Self::SetPaused(_) => "set_paused",
            Self::UpdateOperator(_) => "update_operator",
            Self::Withdraw(_) => "withdraw",
        }
    }

    /// Whether this is one of the operator-only entry points.
    #[must_use]
    pub fn is_administrative(&self) -> bool {
        matches!(
            self,
            Self::SetPaused(_) | Self::UpdateOperator(_) | Self::Withdraw(_)
        )
    }
}
