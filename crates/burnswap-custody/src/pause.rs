//! Pause gate for the administrative custodian.
//!
//! Two states, `Active` (initial) and `Paused`. The burn action is only
//! reachable from `Active`; administrative calls are reachable from both.

use std::fmt;

use burnswap_types::{BurnswapError, Result};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an administrative custodian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewarderState {
    Active,
    Paused,
}

impl fmt::Display for RewarderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Paused => write!(f, "PAUSED"),
        }
    }
}

/// Stored as the bare `paused` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    /// A gate starting in `Active`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Setting the current value is a no-op.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn state(&self) -> RewarderState {
        if self.paused {
            RewarderState::Paused
        } else {
            RewarderState::Active
        }
    }

    /// Guard the burn action. Returns `Ok(())` if allowed,
    /// or [`BurnswapError::Paused`] if blocked.
    pub fn check_action(&self) -> Result<()> {
        match self.state() {
            RewarderState::Active => Ok(()),
            RewarderState::Paused => Err(BurnswapError::Paused),
        }
    }
}
