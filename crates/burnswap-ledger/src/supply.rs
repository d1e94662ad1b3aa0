//! Supply conservation invariant checker.
//!
//! Invariant enforced on every ledger:
//! ```text
//! ∀ token: Σ(balances) == Σ(minted)
//! ```
//!
//! Transfers only move units between owners; burning sends them to an
//! address nobody controls, so the burned units still count toward supply.
//! If this ever breaks, a ledger applied a transfer that created or
//! destroyed units.

use std::collections::BTreeMap;

use burnswap_types::{Amount, BurnswapError, Result, TokenId};

/// Tracks per-token minted totals.
#[derive(Debug, Clone, Default)]
pub struct SupplyConservation {
    minted: BTreeMap<TokenId, Amount>,
}

impl SupplyConservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mint. Returns `false` if the total would overflow, in which
    /// case nothing is recorded.
    pub fn record_mint(&mut self, token_id: TokenId, amount: Amount) -> bool {
        let total = self.minted.entry(token_id).or_default();
        match total.checked_add(amount) {
            Some(next) => {
                *total = next;
                true
            }
            None => false,
        }
    }

    /// Expected total supply for a token.
    #[must_use]
    pub fn expected_supply(&self, token_id: TokenId) -> Amount {
        self.minted.get(&token_id).copied().unwrap_or_default()
    }

    /// Verify that the summed balances match what was minted.
    ///
    /// # Errors
    /// Returns [`BurnswapError::SupplyInvariantViolation`] if actual ≠ expected.
    pub fn verify(&self, token_id: TokenId, actual_supply: Amount) -> Result<()> {
        let expected = self.expected_supply(token_id);
        if actual_supply != expected {
            return Err(BurnswapError::SupplyInvariantViolation {
                reason: format!(
                    "Token {token_id}: actual supply {actual_supply} != minted {expected}"
                ),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn tracked_tokens(&self) -> Vec<TokenId> {
        self.minted.keys().copied().collect()
    }
}
