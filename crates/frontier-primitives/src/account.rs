use crate::{Bytes, B256, U256};
use std::collections::BTreeMap;

/// An Ethereum account as held in the world state.
///
/// An address absent from the state is equivalent to an `Account::default()`
/// with nonce `0`, balance `0`, empty code and empty storage — callers read
/// the state through [`crate::State`] rather than constructing this
/// directly for missing accounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    /// Number of transactions sent from this account, or contracts created
    /// by it. Monotonically non-decreasing.
    pub nonce: u64,
    /// Account balance in wei.
    pub balance: U256,
    /// Contract bytecode. Empty for externally-owned accounts.
    pub code: Bytes,
    /// Storage slots, keyed by the raw (unhashed) 32-byte slot key.
    ///
    /// A `BTreeMap` rather than a hash map, per `spec.md` §9: trie insertion
    /// must be deterministic regardless of how the map is iterated, and a
    /// sorted map gives that for free.
    pub storage: BTreeMap<B256, U256>,
}

impl Account {
    /// An account with no code, no storage, zero nonce and zero balance.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this account is indistinguishable from one that was never
    /// written to the state.
    pub fn is_empty(&self) -> bool {
        self.nonce == 0 && self.balance.is_zero() && self.code.is_empty() && self.storage.is_empty()
    }
}
