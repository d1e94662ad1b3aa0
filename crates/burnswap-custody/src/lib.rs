//! # burnswap-custody
//!
//! **Custodians** that burn a collectible and pay a reward in one atomic
//! operation, and the **Host** that runs them.
//!
//! ## Architecture
//!
//! Custodians are pure: given their storage, a [`burnswap_types::CallContext`]
//! and an [`burnswap_types::Entrypoint`], they return the new storage plus the
//! ordered transfer operations to dispatch. They never touch a ledger.
//!
//! The [`Host`] applies one operation at a time:
//! 1. Builds the call context (sender, custodian address, level)
//! 2. Runs the custodian's `execute`
//! 3. Dispatches every operation inside one ledger [`burnswap_ledger::Transaction`]
//! 4. Commits ledgers, storage, and a journal receipt, or nothing at all
//!
//! ## Variants
//!
//! - [`BurnRewarder`]: pull burn, caller-supplied reward, operator controls
//! - [`BurnAndReward`]: pull burn, caller-supplied reward
//! - [`BurnReceiver`]: push burn of a deposited edition, fixed reward

pub mod burn_and_reward;
pub mod custodian;
pub mod deployed;
pub mod host;
pub mod legs;
pub mod pause;
pub mod receiver;
pub mod rewarder;

pub use burn_and_reward::BurnAndReward;
pub use custodian::{Custodian, Execution};
pub use deployed::Deployed;
pub use host::Host;
pub use pause::{PauseGate, RewarderState};
pub use receiver::BurnReceiver;
pub use rewarder::BurnRewarder;
