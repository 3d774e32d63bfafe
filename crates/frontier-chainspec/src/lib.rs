//! Frontier mainnet genesis configuration.
//!
//! Mirrors `reth_primitives::{Genesis, GenesisAccount}` / the Python
//! reference's `ethereum.genesis.GenesisConfig`, but carries no file I/O:
//! loading a genesis JSON file from disk is an external collaborator per the
//! engine's scope (`spec.md` §1), so this crate only defines the shape and
//! the well-known mainnet constants.

use alloy_primitives::{Address, Bytes, B256, B64, U256};
use frontier_primitives::Header;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single pre-funded account in a genesis allocation.
///
/// Frontier's genesis allocation only ever credits a starting balance; no
/// genesis account carries code, storage or a non-zero nonce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    /// Starting balance, in wei.
    pub balance: U256,
}

/// The genesis configuration for a chain: the fixed fields of the genesis
/// header, plus the account allocation credited at block 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genesis {
    /// Genesis proof-of-work difficulty.
    pub difficulty: U256,
    /// Genesis `extra_data`, at most 32 bytes.
    pub extra_data: Bytes,
    /// Genesis gas limit.
    pub gas_limit: u64,
    /// Genesis Ethash nonce.
    pub nonce: B64,
    /// Genesis Unix timestamp.
    pub timestamp: u64,
    /// Accounts pre-funded at block 0, keyed by address.
    pub alloc: BTreeMap<Address, GenesisAccount>,
}

impl Genesis {
    /// Builds the (unsealed) genesis header implied by this configuration.
    ///
    /// `state_root` is left at its empty default; callers compute the real
    /// `state_root` after applying `self.alloc` to an empty world state. The
    /// genesis header always has empty transactions/ommers, so
    /// `transactions_root`/`receipts_root` are the empty-trie root and
    /// `ommers_hash` is `ommers_hash(&[])`.
    pub fn header_template(&self) -> Header {
        Header {
            parent_hash: B256::ZERO,
            ommers_hash: frontier_primitives::ommers_hash(&[]),
            beneficiary: Address::ZERO,
            state_root: B256::ZERO,
            transactions_root: EMPTY_ROOT_HASH,
            receipts_root: EMPTY_ROOT_HASH,
            logs_bloom: Default::default(),
            difficulty: self.difficulty,
            number: 0,
            gas_limit: self.gas_limit,
            gas_used: 0,
            timestamp: self.timestamp,
            extra_data: self.extra_data.clone(),
            mix_hash: B256::ZERO,
            nonce: self.nonce,
        }
    }
}

/// Root hash of an empty Merkle-Patricia trie (`keccak256(rlp(""))`).
pub const EMPTY_ROOT_HASH: B256 = B256::new([
    0x56, 0xe8, 0x1f, 0x17, 0x1b, 0xcc, 0x55, 0xa6, 0xff, 0x83, 0x45, 0xe6, 0x92, 0xc0, 0xf8, 0x6e,
    0x5b, 0x48, 0xe0, 0x1b, 0x99, 0x6c, 0xad, 0xc0, 0x01, 0x62, 0x2f, 0xb5, 0xe3, 0x63, 0xb4, 0x21,
]);

/// Mainnet genesis `extra_data`: 32 prescribed bytes.
const MAINNET_EXTRA_DATA: [u8; 32] = [
    0x11, 0xbb, 0xe8, 0xdb, 0x4e, 0x34, 0x7b, 0x4e, 0x8c, 0x93, 0x7c, 0x1c, 0x83, 0x70, 0xe4, 0xb5,
    0xed, 0x33, 0xad, 0xb3, 0xdb, 0x69, 0xcb, 0xdb, 0x7a, 0x38, 0xe1, 0xe5, 0x0b, 0x1b, 0x82, 0xfa,
];

/// `BLOCK_REWARD` from `spec.md` §4.5: 5 ether, in wei.
pub const BLOCK_REWARD: U256 = U256::from_limbs([0x4563_9182_44f4_0000, 0, 0, 0]);

/// `GAS_LIMIT_ADJUSTMENT_FACTOR` from `spec.md` §4.6.
pub const GAS_LIMIT_ADJUSTMENT_FACTOR: u64 = 1024;

/// `GAS_LIMIT_MINIMUM` from `spec.md` §4.6.
pub const GAS_LIMIT_MINIMUM: u64 = 5000;

/// `GENESIS_DIFFICULTY`, also the difficulty floor for every later block.
pub const GENESIS_DIFFICULTY: U256 = U256::from_limbs([131_072, 0, 0, 0]);

/// The order `n` of the secp256k1 curve; `r` and `s` must lie in `(0, n)`.
pub const SECP256K1N: U256 = U256::from_limbs([
    0xbfd2_5e8c_d036_4141,
    0xbaae_dce6_af48_a03b,
    0xffff_ffff_ffff_fffe,
    0xffff_ffff_ffff_ffff,
]);

/// Mainnet Frontier genesis configuration constants (`spec.md` §6).
///
/// `alloc` is intentionally empty here: the real mainnet allocation is
/// ~8,900 accounts loaded from a genesis JSON file by the out-of-scope
/// loader. Callers that need the real allocation populate `alloc` after
/// deserializing it themselves; what this crate fixes is everything the
/// consensus layer checks against in the genesis-header special case.
pub fn mainnet() -> Genesis {
    Genesis {
        difficulty: U256::from_limbs([0x4_0000_0000, 0, 0, 0]),
        extra_data: Bytes::copy_from_slice(&MAINNET_EXTRA_DATA),
        gas_limit: 5000,
        nonce: B64::from(0x0000_0000_0000_0042u64),
        timestamp: 0,
        alloc: BTreeMap::new(),
    }
}

/// `ZERO_ADDRESS`, used as the genesis `coinbase`.
pub const ZERO_ADDRESS: Address = Address::ZERO;
