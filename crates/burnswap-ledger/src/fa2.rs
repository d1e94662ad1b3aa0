//! Reference FA2 multi-asset ledger.
//!
//! Tracks per-(owner, token) balances and per-(owner, operator, token)
//! approvals. Every `transfer` call is atomic: moves are applied to an overlay
//! and written back only if every move in every batch passed its checks.

use std::{
    any::Any,
    collections::{BTreeMap, BTreeSet},
};

use burnswap_types::{Address, Amount, LedgerError, Result, TokenId, Transfer, TransferBatch};
use serde::{Deserialize, Serialize};

use crate::{AssetLedger, SupplyConservation};

/// FA2 `update_operators` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorUpdate {
    AddOperator {
        owner: Address,
        operator: Address,
        token_id: TokenId,
    },
    RemoveOperator {
        owner: Address,
        operator: Address,
        token_id: TokenId,
    },
}

type Key = (Address, TokenId);

/// In-memory FA2 ledger.
#[derive(Debug, Clone, Default)]
pub struct Fa2Ledger {
    /// Token ids that exist on this ledger.
    tokens: BTreeSet<TokenId>,
    /// Non-zero balances only.
    balances: BTreeMap<Key, Amount>,
    /// (owner, operator, token) approvals.
    operators: BTreeSet<(Address, Address, TokenId)>,
    supply: SupplyConservation,
}

impl Fa2Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a token id. Defining an existing id is a no-op.
    pub fn define_token(&mut self, token_id: TokenId) {
        self.tokens.insert(token_id);
    }

    /// Builder form of [`Self::define_token`].
    #[must_use]
    pub fn with_token(mut self, token_id: TokenId) -> Self {
        self.define_token(token_id);
        self
    }

    #[must_use]
    pub fn is_defined(&self, token_id: TokenId) -> bool {
        self.tokens.contains(&token_id)
    }

    /// Create `amount` new units of `token_id` owned by `owner`.
    ///
    /// # Errors
    /// - `TokenUndefined` if the token was never defined
    /// - `BalanceOverflow` if total supply would overflow
    pub fn mint(
        &mut self,
        owner: &Address,
        token_id: TokenId,
        amount: Amount,
    ) -> std::result::Result<(), LedgerError> {
        if !self.is_defined(token_id) {
            return Err(LedgerError::TokenUndefined);
        }
        if !self.supply.record_mint(token_id, amount) {
            return Err(LedgerError::BalanceOverflow);
        }
        // Balance ≤ supply, so this cannot overflow once the mint was recorded.
        let balance = self.balances.entry((owner.clone(), token_id)).or_default();
        *balance += amount;
        if *balance == 0 {
            self.balances.remove(&(owner.clone(), token_id));
        }
        Ok(())
    }

    /// Apply FA2 operator updates. Only the owner may change its approvals.
    ///
    /// # Errors
    /// - `NotOwner` if `sender` is not the owner named in an update
    /// - `TokenUndefined` if an update names an unknown token
    pub fn update_operators(
        &mut self,
        sender: &Address,
        updates: &[OperatorUpdate],
    ) -> std::result::Result<(), LedgerError> {
        for update in updates {
            let (owner, token_id) = match update {
                OperatorUpdate::AddOperator {
                    owner, token_id, ..
                }
                | OperatorUpdate::RemoveOperator {
                    owner, token_id, ..
                } => (owner, *token_id),
            };
            if owner != sender {
                return Err(LedgerError::NotOwner);
            }
            if !self.is_defined(token_id) {
                return Err(LedgerError::TokenUndefined);
            }
        }

        for update in updates {
            match update {
                OperatorUpdate::AddOperator {
                    owner,
                    operator,
                    token_id,
                } => {
                    self.operators
                        .insert((owner.clone(), operator.clone(), *token_id));
                }
                OperatorUpdate::RemoveOperator {
                    owner,
                    operator,
                    token_id,
                } => {
                    self.operators
                        .remove(&(owner.clone(), operator.clone(), *token_id));
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_operator(&self, owner: &Address, operator: &Address, token_id: TokenId) -> bool {
        self.operators
            .contains(&(owner.clone(), operator.clone(), token_id))
    }

    /// Sum of all balances for a token.
    #[must_use]
    pub fn total_supply(&self, token_id: TokenId) -> Amount {
        self.balances
            .iter()
            .filter(|((_, t), _)| *t == token_id)
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// Verify supply conservation for every minted token.
    pub fn verify_supply(&self) -> Result<()> {
        for token_id in self.supply.tracked_tokens() {
            self.supply.verify(token_id, self.total_supply(token_id))?;
        }
        Ok(())
    }

    fn balance_in(&self, overlay: &BTreeMap<Key, Amount>, key: &Key) -> Amount {
        overlay
            .get(key)
            .or_else(|| self.balances.get(key))
            .copied()
            .unwrap_or_default()
    }
}

impl AssetLedger for Fa2Ledger {
    fn transfer(
        &mut self,
        sender: &Address,
        batches: &[TransferBatch],
    ) -> std::result::Result<Vec<Transfer>, LedgerError> {
        let mut overlay: BTreeMap<Key, Amount> = BTreeMap::new();
        let mut applied = Vec::new();

        for batch in batches {
            for tx in &batch.txs {
                if !self.is_defined(tx.token_id) {
                    return Err(LedgerError::TokenUndefined);
                }
                if sender != &batch.from && !self.is_operator(&batch.from, sender, tx.token_id) {
                    return Err(LedgerError::NotOperator);
                }

                let from_key = (batch.from.clone(), tx.token_id);
                let remaining = self
                    .balance_in(&overlay, &from_key)
                    .checked_sub(tx.amount)
                    .ok_or(LedgerError::InsufficientBalance)?;
                overlay.insert(from_key, remaining);

                let to_key = (tx.to.clone(), tx.token_id);
                let credited = self
                    .balance_in(&overlay, &to_key)
                    .checked_add(tx.amount)
                    .ok_or(LedgerError::BalanceOverflow)?;
                overlay.insert(to_key, credited);

                applied.push(Transfer {
                    from: batch.from.clone(),
                    to: tx.to.clone(),
                    token_id: tx.token_id,
                    amount: tx.amount,
                });
            }
        }

        for (key, amount) in overlay {
            if amount == 0 {
                self.balances.remove(&key);
            } else {
                self.balances.insert(key, amount);
            }
        }
        Ok(applied)
    }

    fn balance_of(&self, owner: &Address, token_id: TokenId) -> Amount {
        self.balances
            .get(&(owner.clone(), token_id))
            .copied()
            .unwrap_or_default()
    }

    fn box_clone(&self) -> Box<dyn AssetLedger> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NFT: TokenId = TokenId(123);

    fn setup() -> (Fa2Ledger, Address, Address) {
        let alice = Address::implicit_for("alice");
        let bob = Address::implicit_for("bob");
        let mut ledger = Fa2Ledger::new().with_token(NFT);
        ledger.mint(&alice, NFT, 3).unwrap();
        (ledger, alice, bob)
    }

    #[test]
    fn mint_requires_defined_token() {
        let mut ledger = Fa2Ledger::new();
        let err = ledger
            .mint(&Address::implicit_for("alice"), TokenId(1), 1)
            .unwrap_err();
        assert_eq!(err, LedgerError::TokenUndefined);
    }

    #[test]
    fn owner_can_transfer() {
        let (mut ledger, alice, bob) = setup();
        let moved = ledger
            .transfer(&alice, &[TransferBatch::single(alice.clone(), bob.clone(), NFT, 2)])
            .unwrap();
        assert_eq!(moved.len(), 1);
        assert_eq!(ledger.balance_of(&alice, NFT), 1);
        assert_eq!(ledger.balance_of(&bob, NFT), 2);
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn stranger_is_not_operator() {
        let (mut ledger, alice, bob) = setup();
        let err = ledger
            .transfer(&bob, &[TransferBatch::single(alice.clone(), bob.clone(), NFT, 1)])
            .unwrap_err();
        assert_eq!(err, LedgerError::NotOperator);
        assert_eq!(ledger.balance_of(&alice, NFT), 3);
    }

    #[test]
    fn approved_operator_can_transfer() {
        let (mut ledger, alice, bob) = setup();
        let custodian = Address::originated(5);
        ledger
            .update_operators(
                &alice,
                &[OperatorUpdate::AddOperator {
                    owner: alice.clone(),
                    operator: custodian.clone(),
                    token_id: NFT,
                }],
            )
            .unwrap();
        ledger
            .transfer(&custodian, &[TransferBatch::single(alice.clone(), bob.clone(), NFT, 1)])
            .unwrap();
        assert_eq!(ledger.balance_of(&bob, NFT), 1);
    }

    #[test]
    fn removed_operator_loses_access() {
        let (mut ledger, alice, bob) = setup();
        let custodian = Address::originated(5);
        let add = OperatorUpdate::AddOperator {
            owner: alice.clone(),
            operator: custodian.clone(),
            token_id: NFT,
        };
        let remove = OperatorUpdate::RemoveOperator {
            owner: alice.clone(),
            operator: custodian.clone(),
            token_id: NFT,
        };
        ledger.update_operators(&alice, &[add]).unwrap();
        ledger.update_operators(&alice, &[remove]).unwrap();
        assert!(!ledger.is_operator(&alice, &custodian, NFT));
        let err = ledger
            .transfer(&custodian, &[TransferBatch::single(alice, bob, NFT, 1)])
            .unwrap_err();
        assert_eq!(err, LedgerError::NotOperator);
    }

    #[test]
    fn only_owner_updates_operators() {
        let (mut ledger, alice, bob) = setup();
        let err = ledger
            .update_operators(
                &bob,
                &[OperatorUpdate::AddOperator {
                    owner: alice,
                    operator: bob.clone(),
                    token_id: NFT,
                }],
            )
            .unwrap_err();
        assert_eq!(err, LedgerError::NotOwner);
    }

    #[test]
    fn insufficient_balance_rejected() {
        let (mut ledger, alice, bob) = setup();
        let err = ledger
            .transfer(&alice, &[TransferBatch::single(alice.clone(), bob, NFT, 4)])
            .unwrap_err();
        assert_eq!(err, LedgerError::InsufficientBalance);
    }

    #[test]
    fn undefined_token_rejected() {
        let (mut ledger, alice, bob) = setup();
        let err = ledger
            .transfer(&alice, &[TransferBatch::single(alice.clone(), bob, TokenId(999), 1)])
            .unwrap_err();
        assert_eq!(err, LedgerError::TokenUndefined);
    }

    #[test]
    fn failing_tx_leaves_earlier_txs_unapplied() {
        let (mut ledger, alice, bob) = setup();
        let batch = TransferBatch {
            from: alice.clone(),
            txs: vec![
                burnswap_types::TransferTx {
                    to: bob.clone(),
                    token_id: NFT,
                    amount: 2,
                },
                burnswap_types::TransferTx {
                    to: bob.clone(),
                    token_id: NFT,
                    amount: 2,
                },
            ],
        };
        let err = ledger.transfer(&alice, &[batch]).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientBalance);
        assert_eq!(ledger.balance_of(&alice, NFT), 3);
        assert_eq!(ledger.balance_of(&bob, NFT), 0);
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let (mut ledger, alice, _) = setup();
        ledger
            .transfer(&alice, &[TransferBatch::single(alice.clone(), alice.clone(), NFT, 3)])
            .unwrap();
        assert_eq!(ledger.balance_of(&alice, NFT), 3);
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn zero_transfer_is_accepted() {
        let (mut ledger, alice, bob) = setup();
        let moved = ledger
            .transfer(&alice, &[TransferBatch::single(alice.clone(), bob.clone(), NFT, 0)])
            .unwrap();
        assert_eq!(moved[0].amount, 0);
        assert_eq!(ledger.balance_of(&bob, NFT), 0);
    }

    #[test]
    fn operator_update_json_shape() {
        let update = OperatorUpdate::AddOperator {
            owner: Address::implicit_for("alice"),
            operator: Address::originated(1),
            token_id: NFT,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("add_operator").is_some());
    }
}
