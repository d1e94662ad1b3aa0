//! Push-style custodian with a fixed reward.
//!
//! Flow, usually batched by the caller into one wallet operation:
//! 1. Caller transfers the collectible to the custodian
//! 2. Caller calls `burn_for_reward`
//! 3. Custodian forwards one edition to the burn address and pays the reward

use burnswap_types::{
    Address, Amount, CallContext, CustodianKind, DepositedBurnRequest, Entrypoint, Result,
    TokenId, constants,
};
use serde::{Deserialize, Serialize};

use crate::{
    custodian::{self, Custodian, Execution},
    legs::{self, Custody, RewardAsset},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnReceiver {
    reward_ledger: Address,
    reward_token_id: TokenId,
    burn_address: Address,
    reward_amount: Amount,
}

impl BurnReceiver {
    #[must_use]
    pub fn new(
        reward_ledger: Address,
        reward_token_id: TokenId,
        burn_address: Address,
        reward_amount: Amount,
    ) -> Self {
        Self {
            reward_ledger,
            reward_token_id,
            burn_address,
            reward_amount,
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

    #[must_use]
    pub fn reward_amount(&self) -> Amount {
        self.reward_amount
    }

    fn burn_for_reward(
        &self,
        ctx: &CallContext,
        req: &DepositedBurnRequest,
    ) -> Result<Execution<Self>> {
        let reward = RewardAsset {
            ledger: &self.reward_ledger,
            token_id: self.reward_token_id,
        };
        legs::check_not_reward_asset(&req.nft_contract, req.token_id, reward)?;

        Ok(Execution::unchanged(self.clone())
            .then(legs::burn_leg(
                ctx,
                Custody::Custodian,
                &req.nft_contract,
                req.token_id,
                constants::DEPOSITED_BURN_AMOUNT,
                &self.burn_address,
            ))
            .then(legs::reward_leg(ctx, reward, self.reward_amount)))
    }
}

impl Custodian for BurnReceiver {
    fn kind(&self) -> CustodianKind {
        CustodianKind::BurnReceiver
    }

    fn execute(&self, ctx: &CallContext, call: &Entrypoint) -> Result<Execution<Self>> {
        match call {
            Entrypoint::BurnForReward(req) => self.burn_for_reward(ctx, req),
            _ => Err(custodian::unsupported(self.kind(), call)),
        }
    }
}
