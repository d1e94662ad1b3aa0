//! The seam between custodian policy and the host that applies it.

use burnswap_types::{
    BurnswapError, CallContext, CustodianKind, Entrypoint, Result, TransferOperation,
};

/// A custodian's decision for one call: the storage to keep if the operation
/// commits, and the transfers to dispatch, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution<S> {
    pub storage: S,
    pub operations: Vec<TransferOperation>,
}

impl<S> Execution<S> {
    /// No transfers; `storage` is kept as given.
    #[must_use]
    pub fn unchanged(storage: S) -> Self {
        Self {
            storage,
            operations: Vec::new(),
        }
    }

    /// Append a transfer after the ones already queued.
    #[must_use]
    pub fn then(mut self, operation: TransferOperation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn map_storage<T>(self, f: impl FnOnce(S) -> T) -> Execution<T> {
        Execution {
            storage: f(self.storage),
            operations: self.operations,
        }
    }
}

/// A burn-and-reward custodian.
///
/// `execute` must be a pure function of `(self, ctx, call)`: the host decides
/// whether its result is committed.
pub trait Custodian: Clone {
    fn kind(&self) -> CustodianKind;

    fn execute(&self, ctx: &CallContext, call: &Entrypoint) -> Result<Execution<Self>>;
}

pub(crate) fn unsupported(kind: CustodianKind, call: &Entrypoint) -> BurnswapError {
    BurnswapError::UnsupportedEntrypoint {
        kind,
        entrypoint: call.name(),
    }
}
