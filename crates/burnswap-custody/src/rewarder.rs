//! Administrative burn-and-reward custodian.
//!
//! Pull-style burn with a reward amount computed off-chain and passed in by
//! the caller. A single operator may pause the action, hand the operator role
//! to another address, and withdraw reward units held by the custodian.
//!
//! ```text
//!   ┌────────┐ set_paused(true)  ┌────────┐
//!   │ ACTIVE ├──────────────────▶│ PAUSED │
//!   │        │◀──────────────────┤        │
//!   └────────┘ set_paused(false) └────────┘
//!   burn_and_reward: ACTIVE only
//!   set_paused / update_operator / withdraw: both states, operator only
//! ```

use burnswap_types::{
    Address, BurnRequest, BurnswapError, CallContext, CustodianKind, Entrypoint, Leg, Result,
    TokenId, TransferBatch, TransferOperation, WithdrawRequest,
};
use serde::{Deserialize, Serialize};

use crate::{
    custodian::{Custodian, Execution},
    legs::{self, Custody, RewardAsset},
    pause::{PauseGate, RewarderState},
};

/// Storage of the administrative custodian. Every field is readable by anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRewarder {
    operator: Address,
    reward_ledger: Address,
    reward_token_id: TokenId,
    burn_address: Address,
    paused: PauseGate,
}

impl BurnRewarder {
    /// A new custodian in the `Active` state.
    #[must_use]
    pub fn new(
        operator: Address,
        reward_ledger: Address,
        reward_token_id: TokenId,
        burn_address: Address,
    ) -> Self {
        Self {
            operator,
            reward_ledger,
            reward_token_id,
            burn_address,
            paused: PauseGate::new(),
        }
    }

    #[must_use]
    pub fn operator(&self) -> &Address {
        &self.operator
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
    pub fn is_paused(&self) -> bool {
        self.paused.is_paused()
    }

    #[must_use]
    pub fn state(&self) -> RewarderState {
        self.paused.state()
    }

    fn reward_asset(&self) -> RewardAsset<'_> {
        RewardAsset {
            ledger: &self.reward_ledger,
            token_id: self.reward_token_id,
        }
    }

    fn require_operator(&self, ctx: &CallContext) -> Result<()> {
        if ctx.sender == self.operator {
            Ok(())
        } else {
            Err(BurnswapError::Unauthorized {
                caller: ctx.sender.clone(),
            })
        }
    }

    fn burn_and_reward(&self, ctx: &CallContext, req: &BurnRequest) -> Result<Execution<Self>> {
        // Nothing may happen before the pause check.
        self.paused.check_action()?;

        let burn = legs::burn_leg(
            ctx,
            Custody::Caller,
            &req.nft_contract,
            req.token_id,
            req.amount,
            &self.burn_address,
        );
        let reward = legs::reward_leg(ctx, self.reward_asset(), req.reward_amount);
        Ok(Execution::unchanged(self.clone()).then(burn).then(reward))
    }

    fn set_paused(&self, ctx: &CallContext, paused: bool) -> Result<Execution<Self>> {
        self.require_operator(ctx)?;
        let mut next = self.clone();
        next.paused.set_paused(paused);
        tracing::debug!(from = %self.state(), to = %next.state(), "Pause flag staged");
        Ok(Execution::unchanged(next))
    }

    fn update_operator(&self, ctx: &CallContext, new_operator: &Address) -> Result<Execution<Self>> {
        self.require_operator(ctx)?;
        let mut next = self.clone();
        next.operator = new_operator.clone();
        tracing::debug!(
            old = %self.operator,
            new = %new_operator,
            "Operator rotation staged"
        );
        Ok(Execution::unchanged(next))
    }

    fn withdraw(&self, ctx: &CallContext, req: &WithdrawRequest) -> Result<Execution<Self>> {
        self.require_operator(ctx)?;
        let drain = TransferOperation {
            leg: Leg::Withdraw,
            ledger: self.reward_ledger.clone(),
            batches: vec![TransferBatch::single(
                ctx.self_address.clone(),
                req.recipient.clone(),
                self.reward_token_id,
                req.amount,
            )],
        };
        Ok(Execution::unchanged(self.clone()).then(drain))
    }
}

impl Custodian for BurnRewarder {
    fn kind(&self) -> CustodianKind {
        CustodianKind::BurnRewarder
    }

    fn execute(&self, ctx: &CallContext, call: &Entrypoint) -> Result<Execution<Self>> {
        match call {
            Entrypoint::BurnAndReward(req) => self.burn_and_reward(ctx, req),
            Entrypoint::SetPaused(paused) => self.set_paused(ctx, *paused),
            Entrypoint::UpdateOperator(new_operator) => self.update_operator(ctx, new_operator),
            Entrypoint::Withdraw(req) => self.withdraw(ctx, req),
            Entrypoint::BurnForReward(_) => Err(crate::custodian::unsupported(self.kind(), call)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TV: TokenId = TokenId(754_916);

    struct Actors {
        operator: Address,
        carol: Address,
        nft_ledger: Address,
        self_address: Address,
    }

    fn setup() -> (BurnRewarder, Actors) {
        let actors = Actors {
            operator: Address::implicit_for("operator"),
            carol: Address::implicit_for("carol"),
            nft_ledger: Address::originated(0),
            self_address: Address::originated(2),
        };
        let rewarder = BurnRewarder::new(
            actors.operator.clone(),
            Address::originated(1),
            TV,
            Address::burn(),
        );
        (rewarder, actors)
    }

    fn ctx(sender: &Address, actors: &Actors) -> CallContext {
        CallContext::new(sender.clone(), actors.self_address.clone(), 1)
    }

    fn burn_call(actors: &Actors) -> Entrypoint {
        Entrypoint::BurnAndReward(BurnRequest {
            nft_contract: actors.nft_ledger.clone(),
            token_id: TokenId(123),
            amount: 1,
            reward_amount: 1,
        })
    }

    #[test]
    fn burn_emits_burn_then_reward() {
        let (rewarder, actors) = setup();
        let exec = rewarder
            .execute(&ctx(&actors.carol, &actors), &burn_call(&actors))
            .unwrap();
        assert_eq!(exec.operations.len(), 2);
        assert_eq!(exec.operations[0].leg, Leg::Burn);
        assert_eq!(exec.operations[0].ledger, actors.nft_ledger);
        assert_eq!(exec.operations[0].batches[0].from, actors.carol);
        assert_eq!(exec.operations[1].leg, Leg::Reward);
        assert_eq!(exec.operations[1].batches[0].txs[0].to, actors.carol);
        assert_eq!(exec.operations[1].batches[0].txs[0].token_id, TV);
        assert_eq!(exec.storage, rewarder);
    }

    #[test]
    fn paused_burn_fails_before_any_operation() {
        let (mut rewarder, actors) = setup();
        rewarder.paused.set_paused(true);
        let err = rewarder
            .execute(&ctx(&actors.carol, &actors), &burn_call(&actors))
            .unwrap_err();
        assert!(matches!(err, BurnswapError::Paused));
    }

    #[test]
    fn paused_rejects_even_zero_amount_burn() {
        let (mut rewarder, actors) = setup();
        rewarder.paused.set_paused(true);
        let bad = Entrypoint::BurnAndReward(BurnRequest {
            nft_contract: actors.nft_ledger.clone(),
            token_id: TokenId(123),
            amount: 0,
            reward_amount: 1,
        });
        let err = rewarder.execute(&ctx(&actors.carol, &actors), &bad).unwrap_err();
        assert!(matches!(err, BurnswapError::Paused));
    }

    #[test]
    fn operator_pauses_and_unpauses() {
        let (rewarder, actors) = setup();
        let op_ctx = ctx(&actors.operator, &actors);
        let paused = rewarder
            .execute(&op_ctx, &Entrypoint::SetPaused(true))
            .unwrap();
        assert!(paused.operations.is_empty());
        assert_eq!(paused.storage.state(), RewarderState::Paused);

        let resumed = paused
            .storage
            .execute(&op_ctx, &Entrypoint::SetPaused(false))
            .unwrap();
        assert_eq!(resumed.storage.state(), RewarderState::Active);
    }

    #[test]
    fn non_operator_cannot_administer() {
        let (rewarder, actors) = setup();
        let carol_ctx = ctx(&actors.carol, &actors);
        let calls = [
            Entrypoint::SetPaused(true),
            Entrypoint::UpdateOperator(actors.carol.clone()),
            Entrypoint::Withdraw(WithdrawRequest {
                recipient: actors.carol.clone(),
                amount: 5,
            }),
        ];
        for call in &calls {
            let err = rewarder.execute(&carol_ctx, call).unwrap_err();
            assert!(
                matches!(&err, BurnswapError::Unauthorized { caller } if caller == &actors.carol),
                "{} should be unauthorized, got {err:?}",
                call.name()
            );
        }
    }

    #[test]
    fn update_operator_changes_only_operator() {
        let (rewarder, actors) = setup();
        let exec = rewarder
            .execute(
                &ctx(&actors.operator, &actors),
                &Entrypoint::UpdateOperator(actors.carol.clone()),
            )
            .unwrap();
        let next = exec.storage;
        assert_eq!(next.operator(), &actors.carol);
        assert_eq!(next.reward_ledger(), rewarder.reward_ledger());
        assert_eq!(next.reward_token_id(), rewarder.reward_token_id());
        assert_eq!(next.burn_address(), rewarder.burn_address());
        assert_eq!(next.is_paused(), rewarder.is_paused());
    }

    #[test]
    fn admin_calls_allowed_while_paused() {
        let (mut rewarder, actors) = setup();
        rewarder.paused.set_paused(true);
        let exec = rewarder
            .execute(
                &ctx(&actors.operator, &actors),
                &Entrypoint::Withdraw(WithdrawRequest {
                    recipient: actors.operator.clone(),
                    amount: 5,
                }),
            )
            .unwrap();
        assert_eq!(exec.operations.len(), 1);
        let op = &exec.operations[0];
        assert_eq!(op.leg, Leg::Withdraw);
        assert_eq!(op.batches[0].from, actors.self_address);
        assert_eq!(op.batches[0].txs[0].amount, 5);
    }

    #[test]
    fn burn_for_reward_not_exposed() {
        let (rewarder, actors) = setup();
        let call = Entrypoint::BurnForReward(burnswap_types::DepositedBurnRequest {
            nft_contract: actors.nft_ledger.clone(),
            token_id: TokenId(123),
        });
        let err = rewarder
            .execute(&ctx(&actors.carol, &actors), &call)
            .unwrap_err();
        assert!(matches!(err, BurnswapError::UnsupportedEntrypoint { .. }));
    }
}
