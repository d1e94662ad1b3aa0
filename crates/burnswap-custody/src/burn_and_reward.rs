//! Non-administrative pull-style custodian.
//!
//! The caller approves the custodian as an operator of its collectible, then
//! calls `burn_and_reward` with the reward amount computed off-chain.

use burnswap_types::{
    Address, BurnRequest, CallContext, CustodianKind, Entrypoint, Result, TokenId,
};
use serde::{Deserialize, Serialize};

use crate::{
    custodian::{self, Custodian, Execution},
    legs::{self, Custody, RewardAsset},
};

/// Immutable configuration; nothing in this custodian ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnAndReward {
    reward_ledger: Address,
    reward_token_id: TokenId,
    burn_address: Address,
}

impl BurnAndReward {
    #[must_use]
    pub fn new(reward_ledger: Address, reward_token_id: TokenId, burn_address: Address) -> Self {
        Self {
            reward_ledger,
            reward_token_id,
            burn_address,
        }
    }

    #[must_use]
    pub fn reward_ledger(&self) -> &Address {
        &self.reward_ledger
    }

    #[must_use]
    pub fn reward_token_id(&self) -> TokenId {
        self.reward_token_id
    }

    #[must_use]
    pub fn burn_address(&self) -> &Address {
        &self.burn_address
    }

    fn burn_and_reward(&self, ctx: &CallContext, req: &BurnRequest) -> Result<Execution<Self>> {
        let reward = RewardAsset {
            ledger: &self.reward_ledger,
            token_id: self.reward_token_id,
        };
        Ok(Execution::unchanged(self.clone())
            .then(legs::burn_leg(
                ctx,
                Custody::Caller,
                &req.nft_contract,
                req.token_id,
                req.amount,
                &self.burn_address,
            ))
            .then(legs::reward_leg(ctx, reward, req.reward_amount)))
    }
}

impl Custodian for BurnAndReward {
    fn kind(&self) -> CustodianKind {
        CustodianKind::BurnAndReward
    }

    fn execute(&self, ctx: &CallContext, call: &Entrypoint) -> Result<Execution<Self>> {
        match call {
            Entrypoint::BurnAndReward(req) => self.burn_and_reward(ctx, req),
            _ => Err(custodian::unsupported(self.kind(), call)),
        }
    }
}
