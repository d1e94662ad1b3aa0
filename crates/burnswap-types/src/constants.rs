//! System-wide constants for the Burnswap custodian.

use crate::Amount;

/// Canonical burn address. Nobody holds the key for it, so anything sent
/// there is out of circulation for good.
pub const BURN_ADDRESS: &str = "tz1burnburnburnburnburnburnburjAYjjX";

/// Reward paid per action by fixed-reward custodians when the config omits it.
pub const DEFAULT_REWARD_AMOUNT: Amount = 1;

/// Editions burned per action by the deposit-then-burn custodian.
pub const DEPOSITED_BURN_AMOUNT: Amount = 1;

/// Accepted prefixes for implicit (key-backed) accounts.
pub const IMPLICIT_PREFIXES: [&str; 4] = ["tz1", "tz2", "tz3", "tz4"];

/// Prefix for originated (contract) accounts.
pub const ORIGINATED_PREFIX: &str = "KT1";

/// Maximum address length accepted by [`crate::Address::parse`].
pub const MAX_ADDRESS_LEN: usize = 64;

/// Domain separator for originated address derivation.
pub const ORIGINATION_DOMAIN: &[u8] = b"burnswap:origination:v1:";

/// Domain separator for operation hashes.
pub const OPERATION_HASH_DOMAIN: &[u8] = b"burnswap:operation:v1:";

