//! A custodian instance as stored by the host.

use burnswap_types::{CallContext, CustodianConfig, CustodianKind, Entrypoint, Result};
use serde::{Deserialize, Serialize};

use crate::{BurnAndReward, BurnReceiver, BurnRewarder, Custodian, Execution};

/// Any of the custodian variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Deployed {
    BurnRewarder(BurnRewarder),
    BurnAndReward(BurnAndReward),
    BurnReceiver(BurnReceiver),
}

impl Deployed {
    /// Build the storage described by an origination config.
    ///
    /// # Errors
    /// Returns [`burnswap_types::BurnswapError::Configuration`] if the config
    /// fails validation.
    pub fn from_config(config: &CustodianConfig) -> Result<Self> {
        config.validate()?;
        let deployed = match config.clone() {
            CustodianConfig::BurnRewarder {
                operator,
                reward_ledger,
                reward_token_id,
                burn_address,
            } => BurnRewarder::new(operator, reward_ledger, reward_token_id, burn_address).into(),
            CustodianConfig::BurnAndReward {
                reward_ledger,
                reward_token_id,
                burn_address,
            } => BurnAndReward::new(reward_ledger, reward_token_id, burn_address).into(),
            CustodianConfig::BurnReceiver {
                reward_ledger,
                reward_token_id,
                burn_address,
                reward_amount,
            } => BurnReceiver::new(reward_ledger, reward_token_id, burn_address, reward_amount)
                .into(),
        };
        Ok(deployed)
    }

    #[must_use]
    pub fn as_rewarder(&self) -> Option<&BurnRewarder> {
        match self {
            Self::BurnRewarder(inner) => Some(inner),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_burn_and_reward(&self) -> Option<&BurnAndReward> {
        match self {
            Self::BurnAndReward(inner) => Some(inner),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_receiver(&self) -> Option<&BurnReceiver> {
        match self {
            Self::BurnReceiver(inner) => Some(inner),
            _ => None,
        }
    }
}

impl Custodian for Deployed {
    fn kind(&self) -> CustodianKind {
        match self {
            Self::BurnRewarder(inner) => inner.kind(),
            Self::BurnAndReward(inner) => inner.kind(),
            Self::BurnReceiver(inner) => inner.kind(),
        }
    }

    fn execute(&self, ctx: &CallContext, call: &Entrypoint) -> Result<Execution<Self>> {
        Ok(match self {
            Self::BurnRewarder(inner) => inner.execute(ctx, call)?.map_storage(Self::from),
            Self::BurnAndReward(inner) => inner.execute(ctx, call)?.map_storage(Self::from),
            Self::BurnReceiver(inner) => inner.execute(ctx, call)?.map_storage(Self::from),
        })
    }
}

impl From<BurnRewarder> for Deployed {
    fn from(inner: BurnRewarder) -> Self {
        Self::BurnRewarder(inner)
    }
}

impl From<BurnAndReward> for Deployed {
    fn from(inner: BurnAndReward) -> Self {
        Self::BurnAndReward(inner)
    }
}

impl From<BurnReceiver> for Deployed {
    fn from(inner: BurnReceiver) -> Self {
        Self::BurnReceiver(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnswap_types::{Address, BurnswapError, TokenId};

    #[test]
    fn config_builds_matching_variant() {
        let operator = Address::implicit_for("operator");
        let config = CustodianConfig::BurnRewarder {
            operator: operator.clone(),
            reward_ledger: Address::originated(1),
            reward_token_id: TokenId(754_916),
            burn_address: Address::burn(),
        };
        let deployed = Deployed::from_config(&config).unwrap();
        assert_eq!(deployed.kind(), CustodianKind::BurnRewarder);
        let rewarder = deployed.as_rewarder().unwrap();
        assert_eq!(rewarder.operator(), &operator);
        assert!(!rewarder.is_paused());
        assert!(deployed.as_receiver().is_none());
    }

    #[test]
    fn invalid_config_rejected() {
        let config = CustodianConfig::BurnReceiver {
            reward_ledger: Address::originated(1),
            reward_token_id: TokenId(1),
            burn_address: Address::burn(),
            reward_amount: 0,
        };
        let err = Deployed::from_config(&config).unwrap_err();
        assert!(matches!(err, BurnswapError::Configuration(_)));
    }

    #[test]
    fn storage_serializes_with_kind_tag() {
        let deployed: Deployed =
            BurnAndReward::new(Address::originated(1), TokenId(7), Address::burn()).into();
        let json = serde_json::to_value(&deployed).unwrap();
        assert_eq!(json["kind"], "burn_and_reward");
        assert_eq!(json["reward_token_id"], 7);
        let back: Deployed = serde_json::from_value(json).unwrap();
        assert_eq!(back, deployed);
    }

    #[test]
    fn receiver_storage_roundtrips() {
        let deployed: Deployed =
            BurnReceiver::new(Address::originated(1), TokenId(7), Address::burn(), 3).into();
        let json = serde_json::to_string(&deployed).unwrap();
        let back: Deployed = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_receiver().unwrap().reward_amount(), 3);
        assert_eq!(back, deployed);
    }

    #[test]
    fn rewarder_storage_roundtrips_paused_flag() {
        let mut rewarder = BurnRewarder::new(
            Address::implicit_for("operator"),
            Address::originated(1),
            TokenId(7),
            Address::burn(),
        );
        let ctx = CallContext::new(rewarder.operator().clone(), Address::originated(2), 1);
        rewarder = rewarder
            .execute(&ctx, &Entrypoint::SetPaused(true))
            .unwrap()
            .storage;
        let deployed: Deployed = rewarder.into();
        let json = serde_json::to_value(&deployed).unwrap();
        assert_eq!(json["paused"], true);
        let back: Deployed = serde_json::from_value(json).unwrap();
        assert!(back.as_rewarder().unwrap().is_paused());
    }
}
