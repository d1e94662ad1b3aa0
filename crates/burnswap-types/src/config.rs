//! Origination configuration for the custodian variants.
//!
//! Configs are plain JSON documents tagged by `kind`:
//!
//! ```json
//! {
//!   "kind": "burn_rewarder",
//!   "operator": "tz1...",
//!   "reward_ledger": "KT1...",
//!   "reward_token_id": 754916
//! }
//! ```
//!
//! `burn_address` defaults to [`constants::BURN_ADDRESS`].

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Address, Amount, BurnswapError, Result, TokenId, constants};

/// The custodian variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustodianKind {
    /// Administrative variant: pull burn, caller-supplied reward, operator controls.
    BurnRewarder,
    /// Pull burn, caller-supplied reward, no administration.
    BurnAndReward,
    /// Push burn of a deposited edition, fixed reward.
    BurnReceiver,
}

impl fmt::Display for CustodianKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BurnRewarder => write!(f, "BURN_REWARDER"),
            Self::BurnAndReward => write!(f, "BURN_AND_REWARD"),
            Self::BurnReceiver => write!(f, "BURN_RECEIVER"),
        }
    }
}

fn default_burn_address() -> Address {
    Address::burn()
}

fn default_reward_amount() -> Amount {
    constants::DEFAULT_REWARD_AMOUNT
}

/// Parameters supplied at origination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustodianConfig {
    BurnRewarder {
        operator: Address,
        reward_ledger: Address,
        reward_token_id: TokenId,
        #[serde(default = "default_burn_address")]
        burn_address: Address,
    },
    BurnAndReward {
        reward_ledger: Address,
        reward_token_id: TokenId,
        #[serde(default = "default_burn_address")]
        burn_address: Address,
    },
    BurnReceiver {
        reward_ledger: Address,
        reward_token_id: TokenId,
        #[serde(default = "default_burn_address")]
        burn_address: Address,
        #[serde(default = "default_reward_amount")]
        reward_amount: Amount,
    },
}

impl CustodianConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn kind(&self) -> CustodianKind {
        match self {
            Self::BurnRewarder { .. } => CustodianKind::BurnRewarder,
            Self::BurnAndReward { .. } => CustodianKind::BurnAndReward,
            Self::BurnReceiver { .. } => CustodianKind::BurnReceiver,
        }
    }

    #[must_use]
    pub fn reward_ledger(&self) -> &Address {
        match self {
            Self::BurnRewarder { reward_ledger, .. }
            | Self::BurnAndReward { reward_ledger, .. }
            | Self::BurnReceiver { reward_ledger, .. } => reward_ledger,
        }
    }

    #[must_use]
    pub fn burn_address(&self) -> &Address {
        match self {
            Self::BurnRewarder { burn_address, .. }
            | Self::BurnAndReward { burn_address, .. }
            | Self::BurnReceiver { burn_address, .. } => burn_address,
        }
    }

    /// Reject configurations that could never work or would defeat the burn.
    ///
    /// # Errors
    /// Returns [`BurnswapError::Configuration`] when:
    /// - the reward ledger is not an originated address,
    /// - the burn address is an originated address (contracts can move funds out),
    /// - the operator is the burn address,
    /// - a fixed reward amount is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.reward_ledger().is_originated() {
            return Err(BurnswapError::Configuration(format!(
                "reward_ledger {} must be an originated (KT1) address",
                self.reward_ledger()
            )));
        }
        if self.burn_address().is_originated() {
            return Err(BurnswapError::Configuration(format!(
                "burn_address {} must be an implicit address",
                self.burn_address()
            )));
        }
        match self {
            Self::BurnRewarder {
                operator,
                burn_address,
                ..
            } if operator == burn_address => Err(BurnswapError::Configuration(
                "operator must not be the burn address".into(),
            )),
            Self::BurnReceiver { reward_amount, .. } if *reward_amount == 0 => Err(
                BurnswapError::Configuration("reward_amount must be positive".into()),
            ),
            _ => Ok(()),
        }
    }
}
