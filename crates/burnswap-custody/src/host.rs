//! The execution environment: ledgers, originated custodians, and the journal.
//!
//! Each call is applied in full or not at all:
//!
//! ```text
//! call(dest, sender, entrypoint)
//!   → contracts[dest]            (missing → UnknownContract)
//!   → CallContext { sender, self_address: dest, level }
//!   → Deployed::execute           (pure)
//!   → Transaction::dispatch × N   (sender = dest)
//!   → commit ledgers → store new storage → journal receipt
//! ```
//!
//! An error at any step returns before the commit, so ledgers, storage,
//! level, and journal all stay as they were.

use std::collections::BTreeMap;

use burnswap_ledger::{AssetLedger, Fa2Ledger, LedgerRegistry, OperatorUpdate, Transaction};
use burnswap_types::{
    Address, Amount, BurnswapError, CallContext, CustodianConfig, Entrypoint, Leg,
    OperationReceipt, Result, TokenId, TransferBatch, TransferOperation,
};

use crate::{Custodian, Deployed};

/// Runs one operation at a time against its ledgers and custodians.
#[derive(Default)]
pub struct Host {
    ledgers: LedgerRegistry,
    contracts: BTreeMap<Address, Deployed>,
    journal: Vec<OperationReceipt>,
    originations: u64,
    level: u64,
}

impl Host {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_address(&mut self) -> Address {
        let address = Address::originated(self.originations);
        self.originations += 1;
        address
    }

    /// Originate a ledger contract and return its address.
    ///
    /// # Errors
    /// Returns `InvalidRequest` if the derived address is already taken.
    pub fn originate_ledger(&mut self, ledger: impl AssetLedger + 'static) -> Result<Address> {
        let address = self.next_address();
        self.ledgers.register(address.clone(), Box::new(ledger))?;
        tracing::info!(ledger = %address, "Ledger originated");
        Ok(address)
    }

    /// Originate a custodian and return its address.
    pub fn originate(&mut self, custodian: impl Into<Deployed>) -> Address {
        let custodian = custodian.into();
        let address = self.next_address();
        tracing::info!(
            contract = %address,
            kind = %custodian.kind(),
            "Custodian originated"
        );
        self.contracts.insert(address.clone(), custodian);
        address
    }

    /// Validate a config document and originate the custodian it describes.
    ///
    /// # Errors
    /// Returns `Configuration` if the config fails validation.
    pub fn originate_from_config(&mut self, config: &CustodianConfig) -> Result<Address> {
        let custodian = Deployed::from_config(config)?;
        Ok(self.originate(custodian))
    }

    /// Submit `call` to the custodian at `destination` on behalf of `sender`.
    ///
    /// # Errors
    /// - `UnknownContract` if nothing is originated at `destination`
    /// - whatever the custodian or a ledger dispatch rejects with
    pub fn call(
        &mut self,
        destination: &Address,
        sender: &Address,
        call: &Entrypoint,
    ) -> Result<OperationReceipt> {
        self.apply_call(destination, sender, call)
            .inspect_err(|err| {
                tracing::warn!(
                    contract = %destination,
                    sender = %sender,
                    entrypoint = call.name(),
                    administrative = call.is_administrative(),
                    error = %err,
                    "Operation rejected"
                );
            })
    }

    fn apply_call(
        &mut self,
        destination: &Address,
        sender: &Address,
        call: &Entrypoint,
    ) -> Result<OperationReceipt> {
        let custodian = self
            .contracts
            .get(destination)
            .ok_or_else(|| BurnswapError::UnknownContract(destination.clone()))?;

        let level = self.level + 1;
        let ctx = CallContext::new(sender.clone(), destination.clone(), level);
        let execution = custodian.execute(&ctx, call)?;

        let mut tx = Transaction::begin(&mut self.ledgers);
        for op in &execution.operations {
            tx.dispatch(&ctx.self_address, op)?;
        }
        let events = tx.commit();

        self.contracts.insert(destination.clone(), execution.storage);
        Ok(self.record(level, ctx.sender, ctx.self_address, call.name(), events))
    }

    /// Submit a plain ledger transfer signed by `sender`, e.g. a deposit
    /// into a push-style custodian.
    ///
    /// # Errors
    /// - `InvalidCollaborator` if nothing is registered at `ledger`
    /// - `LedgerRejected` if the ledger refuses the batches
    pub fn transfer(
        &mut self,
        sender: &Address,
        ledger: &Address,
        batches: Vec<TransferBatch>,
    ) -> Result<OperationReceipt> {
        let level = self.level + 1;
        let op = TransferOperation {
            leg: Leg::Direct,
            ledger: ledger.clone(),
            batches,
        };
        let mut tx = Transaction::begin(&mut self.ledgers);
        tx.dispatch(sender, &op).inspect_err(|err| {
            tracing::warn!(ledger = %ledger, sender = %sender, error = %err, "Transfer rejected");
        })?;
        let events = tx.commit();
        Ok(self.record(level, sender.clone(), ledger.clone(), "transfer", events))
    }

    /// FA2 `update_operators` on the ledger at `ledger`, signed by `sender`.
    ///
    /// # Errors
    /// - `InvalidCollaborator` if `ledger` is not an FA2 ledger
    /// - `LedgerRejected` with `FA2_NOT_OWNER` or `FA2_TOKEN_UNDEFINED`
    pub fn update_operators(
        &mut self,
        sender: &Address,
        ledger: &Address,
        updates: &[OperatorUpdate],
    ) -> Result<()> {
        self.fa2_mut(ledger)?
            .update_operators(sender, updates)
            .map_err(|reason| BurnswapError::LedgerRejected {
                ledger: ledger.clone(),
                reason,
            })?;
        tracing::debug!(ledger = %ledger, owner = %sender, updates = updates.len(), "Operators updated");
        Ok(())
    }

    /// Mint on an FA2 ledger, e.g. to fund a custodian's reward balance.
    ///
    /// # Errors
    /// - `InvalidCollaborator` if `ledger` is not an FA2 ledger
    /// - `LedgerRejected` if the token is undefined or supply would overflow
    pub fn mint(
        &mut self,
        ledger: &Address,
        owner: &Address,
        token_id: TokenId,
        amount: Amount,
    ) -> Result<()> {
        self.fa2_mut(ledger)?
            .mint(owner, token_id, amount)
            .map_err(|reason| BurnswapError::LedgerRejected {
                ledger: ledger.clone(),
                reason,
            })
    }

    fn fa2_mut(&mut self, ledger: &Address) -> Result<&mut Fa2Ledger> {
        self.ledgers
            .get_mut::<Fa2Ledger>(ledger)
            .ok_or_else(|| BurnswapError::InvalidCollaborator {
                address: ledger.clone(),
            })
    }

    fn record(
        &mut self,
        level: u64,
        sender: Address,
        destination: Address,
        entrypoint: &str,
        events: Vec<burnswap_types::TransferEvent>,
    ) -> OperationReceipt {
        let receipt = OperationReceipt::new(level, sender, destination, entrypoint, events);
        self.level = level;
        tracing::info!(
            receipt = %receipt.id,
            hash = %receipt.hash,
            level,
            contract = %receipt.destination,
            entrypoint,
            moves = receipt.events.len(),
            "Operation applied"
        );
        self.journal.push(receipt.clone());
        receipt
    }

    /// Current storage of the custodian at `address`.
    #[must_use]
    pub fn storage(&self, address: &Address) -> Option<&Deployed> {
        self.contracts.get(address)
    }

    /// Typed read access to a ledger.
    #[must_use]
    pub fn ledger<L: AssetLedger + 'static>(&self, address: &Address) -> Option<&L> {
        self.ledgers.get::<L>(address)
    }

    /// Committed balance of `owner` on the ledger at `ledger`.
    ///
    /// # Errors
    /// Returns `InvalidCollaborator` if nothing is registered at `ledger`.
    pub fn balance_of(&self, ledger: &Address, owner: &Address, token_id: TokenId) -> Result<Amount> {
        self.ledgers
            .resolve(ledger)
            .map(|l| l.balance_of(owner, token_id))
            .ok_or_else(|| BurnswapError::InvalidCollaborator {
                address: ledger.clone(),
            })
    }

    /// Every committed operation, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[OperationReceipt] {
        &self.journal
    }

    /// Level of the last committed operation; zero before the first.
    #[must_use]
    pub fn level(&self) -> u64 {
        self.level
    }
}
