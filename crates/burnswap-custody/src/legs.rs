//! Builders for the two legs of a burn-and-reward operation.
//!
//! The reward leg takes its recipient from [`CallContext::sender`] only;
//! neither builder accepts a recipient.

use burnswap_types::{
    Address, Amount, BurnswapError, CallContext, Leg, Result, TokenId, TransferBatch,
    TransferOperation,
};

/// Where the collectible sits when the burn leg runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Custody {
    /// Still owned by the caller; the custodian moves it as an approved operator.
    Caller,
    /// Already deposited with the custodian.
    Custodian,
}

impl Custody {
    fn holder(self, ctx: &CallContext) -> &Address {
        match self {
            Self::Caller => &ctx.sender,
            Self::Custodian => &ctx.self_address,
        }
    }
}

/// The reward asset as configured on a custodian.
#[derive(Debug, Clone, Copy)]
pub struct RewardAsset<'a> {
    pub ledger: &'a Address,
    pub token_id: TokenId,
}

/// Reject a push burn that names the custodian's own reward stock.
///
/// The burn leg of a push custodian debits its own balance, so burning the
/// reward asset would pay out stock the caller never deposited.
///
/// # Errors
/// Returns `InvalidRequest` if `(nft_contract, token_id)` is the reward asset.
pub fn check_not_reward_asset(
    nft_contract: &Address,
    token_id: TokenId,
    reward: RewardAsset<'_>,
) -> Result<()> {
    if nft_contract == reward.ledger && token_id == reward.token_id {
        return Err(BurnswapError::InvalidRequest {
            reason: format!("reward asset {nft_contract} {token_id} cannot be burned from custody"),
        });
    }
    Ok(())
}

/// Leg 1: move `amount` of the collectible from its holder to the sink.
#[must_use]
pub fn burn_leg(
    ctx: &CallContext,
    custody: Custody,
    nft_contract: &Address,
    token_id: TokenId,
    amount: Amount,
    burn_address: &Address,
) -> TransferOperation {
    TransferOperation {
        leg: Leg::Burn,
        ledger: nft_contract.clone(),
        batches: vec![TransferBatch::single(
            custody.holder(ctx).clone(),
            burn_address.clone(),
            token_id,
            amount,
        )],
    }
}

/// Leg 2: pay `amount` reward units from the custodian to the caller.
#[must_use]
pub fn reward_leg(ctx: &CallContext, reward: RewardAsset<'_>, amount: Amount) -> TransferOperation {
    TransferOperation {
        leg: Leg::Reward,
        ledger: reward.ledger.clone(),
        batches: vec![TransferBatch::single(
            ctx.self_address.clone(),
            ctx.sender.clone(),
            reward.token_id,
            amount,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CallContext {
        CallContext::new(Address::implicit_for("carol"), Address::originated(3), 1)
    }

    #[test]
    fn pull_burn_comes_from_caller() {
        let ctx = ctx();
        let op = burn_leg(
            &ctx,
            Custody::Caller,
            &Address::originated(0),
            TokenId(123),
            1,
            &Address::burn(),
        );
        assert_eq!(op.leg, Leg::Burn);
        assert_eq!(op.batches[0].from, ctx.sender);
        assert_eq!(op.batches[0].txs[0].to, Address::burn());
    }

    #[test]
    fn push_burn_comes_from_custodian() {
        let ctx = ctx();
        let op = burn_leg(
            &ctx,
            Custody::Custodian,
            &Address::originated(0),
            TokenId(123),
            1,
            &Address::burn(),
        );
        assert_eq!(op.batches[0].from, ctx.self_address);
    }

    #[test]
    fn reward_goes_to_sender() {
        let ctx = ctx();
        let ledger = Address::originated(1);
        let op = reward_leg(
            &ctx,
            RewardAsset {
                ledger: &ledger,
                token_id: TokenId(754_916),
            },
            1,
        );
        assert_eq!(op.leg, Leg::Reward);
        assert_eq!(op.ledger, ledger);
        assert_eq!(op.batches[0].from, ctx.self_address);
        assert_eq!(op.batches[0].txs[0].to, ctx.sender);
    }

    #[test]
    fn reward_stock_cannot_be_burned_from_custody() {
        let ledger = Address::originated(1);
        let reward = RewardAsset {
            ledger: &ledger,
            token_id: TokenId(754_916),
        };
        let err = check_not_reward_asset(&ledger, TokenId(754_916), reward).unwrap_err();
        assert!(matches!(err, BurnswapError::InvalidRequest { .. }));
        // A different token on the same ledger is fine.
        assert!(check_not_reward_asset(&ledger, TokenId(1), reward).is_ok());
    }
}
