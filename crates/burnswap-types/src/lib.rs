//! # burnswap-types
//!
//! Shared types, errors, and configuration for the **Burnswap** custodian.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Addresses**: [`Address`], [`AddressKind`], [`TokenId`], [`Amount`]
//! - **Transfer model**: [`TransferBatch`], [`TransferTx`], [`TransferOperation`], [`TransferEvent`], [`Leg`]
//! - **Requests**: [`Entrypoint`], [`BurnRequest`], [`DepositedBurnRequest`], [`WithdrawRequest`]
//! - **Execution context**: [`CallContext`]
//! - **Receipts**: [`OperationReceipt`], [`OperationHash`], [`ReceiptId`]
//! - **Configuration**: [`CustodianConfig`], [`CustodianKind`]
//! - **Errors**: [`BurnswapError`] with `BS_ERR_` prefix codes, [`LedgerError`] with FA2 codes
//! - **Constants**: canonical burn address and defaults

pub mod address;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod ids;
pub mod receipt;
pub mod request;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use burnswap_types::{Address, Entrypoint, TransferBatch, ...};

pub use address::*;
pub use config::*;
pub use context::*;
pub use error::*;
pub use ids::*;
pub use receipt::*;
pub use request::*;
pub use transfer::*;

// Constants are accessed via `burnswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
