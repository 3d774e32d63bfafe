//! Commonly used types for the Frontier-era Ethereum state-transition engine.
//!
//! This crate contains the consensus-critical data model described in the
//! engine's specification: accounts, the world state, transactions, logs,
//! receipts, headers and blocks. It does not implement any validation or
//! execution logic; see `frontier-consensus` and `frontier-execution` for
//! that.

#![doc(issue_tracker_base_url = "https://github.com/paradigmxyz/reth/issues/")]

pub use alloy_primitives::{
    self, keccak256, Address, Bloom, BloomInput, Bytes, TxKind, B256, B64, U256,
};

mod account;
mod block;
mod bloom;
mod error;
mod header;
mod log;
mod receipt;
mod state;
mod transaction;

pub use account::Account;
pub use block::Block;
pub use bloom::logs_bloom;
pub use error::GotExpected;
pub use header::{ommers_hash, Header, SealedHeader};
pub use log::Log;
pub use receipt::Receipt;
pub use state::{add_ether, move_ether, State, StateExt};
pub use transaction::Transaction;

/// A 32-byte hash, matching `spec.md`'s `Hash32` entity.
pub type Hash32 = B256;
