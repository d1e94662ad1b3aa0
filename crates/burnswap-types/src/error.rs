//! Error types for the Burnswap custodian.
//!
//! All custodian errors use the `BS_ERR_` prefix convention for easy grepping
//! in logs. Error codes are grouped by subsystem:
//! - 1xx: Authorization / state-machine errors
//! - 2xx: Collaborator (external ledger) errors
//! - 3xx: Request / addressing errors
//! - 8xx: Safety invariant errors
//! - 9xx: General / internal errors
//!
//! Ledger rejections keep the FA2 error strings the ledgers themselves emit
//! (see [`LedgerError`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Address, CustodianKind};

/// Rejection reasons reported by an FA2-style asset ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum LedgerError {
    /// The token id is not defined on the ledger.
    #[error("FA2_TOKEN_UNDEFINED")]
    TokenUndefined,
    /// The sender is neither the owner nor an approved operator.
    #[error("FA2_NOT_OPERATOR")]
    NotOperator,
    /// The owner does not hold enough units.
    #[error("FA2_INSUFFICIENT_BALANCE")]
    InsufficientBalance,
    /// Only the owner may change its operator approvals.
    #[error("FA2_NOT_OWNER")]
    NotOwner,
    /// A credit would overflow the balance type.
    #[error("FA2_BALANCE_OVERFLOW")]
    BalanceOverflow,
}

/// Central error enum for all Burnswap operations.
#[derive(Debug, Error)]
pub enum BurnswapError {
    // =================================================================
    // Authorization / State Errors (1xx)
    // =================================================================
    /// The caller is not the principal required for this operation.
    #[error("BS_ERR_100: Unauthorized: {caller} is not the operator")]
    Unauthorized { caller: Address },

    /// An action was attempted while the custodian is paused.
    #[error("BS_ERR_101: Custodian is paused")]
    Paused,

    // =================================================================
    // Collaborator Errors (2xx)
    // =================================================================
    /// The address does not expose a compatible transfer capability.
    #[error("BS_ERR_200: Invalid collaborator: {address} exposes no transfer capability")]
    InvalidCollaborator { address: Address },

    /// The ledger call itself failed.
    #[error("BS_ERR_201: Ledger {ledger} rejected transfer: {reason}")]
    LedgerRejected { ledger: Address, reason: LedgerError },

    // =================================================================
    // Request Errors (3xx)
    // =================================================================
    /// The request parameters are unacceptable.
    #[error("BS_ERR_300: Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// No custodian is originated at this address.
    #[error("BS_ERR_301: Unknown contract: {0}")]
    UnknownContract(Address),

    /// The custodian does not expose this entry point.
    #[error("BS_ERR_302: {kind} has no entrypoint `{entrypoint}`")]
    UnsupportedEntrypoint {
        kind: CustodianKind,
        entrypoint: &'static str,
    },

    /// The string is not a well-formed address.
    #[error("BS_ERR_303: Invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    // =================================================================
    // Safety Invariant Errors (8xx)
    // =================================================================
    /// Token supply on a ledger no longer matches what was minted.
    #[error("BS_ERR_800: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("BS_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("BS_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("BS_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("BS_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BurnswapError>;

impl From<std::io::Error> for BurnswapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BurnswapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_display_contains_caller() {
        let caller = Address::burn();
        let msg = BurnswapError::Unauthorized {
            caller: caller.clone(),
        }
        .to_string();
        assert!(msg.starts_with("BS_ERR_100"), "Got: {msg}");
        assert!(msg.contains(caller.as_str()));
    }

    #[test]
    fn ledger_rejected_carries_fa2_code() {
        let err = BurnswapError::LedgerRejected {
            ledger: Address::originated(0),
            reason: LedgerError::InsufficientBalance,
        };
        let msg = format!("{err}");
        assert!(msg.contains("BS_ERR_201"));
        assert!(msg.contains("FA2_INSUFFICIENT_BALANCE"));
    }

    #[test]
    fn unsupported_entrypoint_display() {
        let err = BurnswapError::UnsupportedEntrypoint {
            kind: CustodianKind::BurnReceiver,
            entrypoint: "withdraw",
        };
        let msg = err.to_string();
        assert!(msg.contains("BURN_RECEIVER"));
        assert!(msg.contains("`withdraw`"));
    }

    #[test]
    fn all_errors_have_bs_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(BurnswapError::Paused),
            Box::new(BurnswapError::InvalidCollaborator {
                address: Address::burn(),
            }),
            Box::new(BurnswapError::UnknownContract(Address::originated(1))),
            Box::new(BurnswapError::Internal("test".into())),
            Box::new(BurnswapError::Configuration("bad".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("BS_ERR_"),
                "Error missing BS_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn io_and_json_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(BurnswapError::from(io), BurnswapError::Io(_)));

        let json = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(
            BurnswapError::from(json),
            BurnswapError::Serialization(_)
        ));
    }
}
