//! Ledger addresses, token ids, and amounts.
//!
//! Addresses follow the Tezos shape: implicit accounts start with `tz1`..`tz4`,
//! originated contracts start with `KT1`. Originated addresses are derived
//! deterministically from an origination nonce so every host that replays the
//! same originations ends up with the same addresses.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{BurnswapError, Result, constants};

/// Natural-number quantity of a token.
pub type Amount = u64;

// ---------------------------------------------------------------------------
// AddressKind
// ---------------------------------------------------------------------------

/// Whether an address is backed by a key or by contract code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    /// Key-backed account (`tz1`..`tz4`).
    Implicit,
    /// Contract account (`KT1`).
    Originated,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit => write!(f, "IMPLICIT"),
            Self::Originated => write!(f, "ORIGINATED"),
        }
    }
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A validated ledger address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse and validate an address.
    ///
    /// # Errors
    /// Returns [`BurnswapError::InvalidAddress`] if the prefix is unknown, the
    /// body is empty, contains non-alphanumeric characters, or is too long.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let invalid = |reason: &str| BurnswapError::InvalidAddress {
            address: raw.clone(),
            reason: reason.to_string(),
        };

        if raw.len() > constants::MAX_ADDRESS_LEN {
            return Err(invalid("too long"));
        }
        if Self::kind_of(&raw).is_none() {
            return Err(invalid("unknown prefix"));
        }
        let body = &raw[3..];
        if body.is_empty() {
            return Err(invalid("empty body"));
        }
        if !body.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("body must be ASCII alphanumeric"));
        }
        Ok(Self(raw))
    }

    /// Derive the address of the `nonce`-th originated contract.
    #[must_use]
    pub fn originated(nonce: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(constants::ORIGINATION_DOMAIN);
        hasher.update(nonce.to_le_bytes());
        let hash = hasher.finalize();
        Self(format!(
            "{}{}",
            constants::ORIGINATED_PREFIX,
            hex::encode(&hash[..16])
        ))
    }

    /// The canonical burn address.
    #[must_use]
    pub fn burn() -> Self {
        Self(constants::BURN_ADDRESS.to_string())
    }

    #[must_use]
    pub fn kind(&self) -> AddressKind {
        // Only validated strings are ever stored.
        Self::kind_of(&self.0).unwrap_or(AddressKind::Implicit)
    }

    #[must_use]
    pub fn is_originated(&self) -> bool {
        self.kind() == AddressKind::Originated
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn kind_of(raw: &str) -> Option<AddressKind> {
        let prefix = raw.get(..3)?;
        if prefix == constants::ORIGINATED_PREFIX {
            Some(AddressKind::Originated)
        } else if constants::IMPLICIT_PREFIXES.contains(&prefix) {
            Some(AddressKind::Implicit)
        } else {
            None
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Address {
    /// A fresh random implicit account address.
    pub fn random_implicit() -> Self {
        let bytes: [u8; 16] = rand::random();
        Self(format!("tz1{}", hex::encode(bytes)))
    }

    /// A deterministic implicit account address for a named test actor.
    pub fn implicit_for(label: &str) -> Self {
        let hash = Sha256::digest(label.as_bytes());
        Self(format!("tz1{}", hex::encode(&hash[..16])))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = BurnswapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = BurnswapError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// Sub-identifier of a token within one ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
