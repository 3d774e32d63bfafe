//! Merkle-Patricia trie root computation.
//!
//! `spec.md` §6 fixes the *contract* of the trie collaborator (a mapping
//! `bytes -> value`, a `secured` flag, and a 32-byte root) but leaves its
//! internal node layout unspecified — "internal node layout is not part of
//! the consensus-level contract". This crate builds that contract on top of
//! `alloy_trie::HashBuilder`, the same incremental hex-prefix trie builder
//! `reth-trie` uses for `StateRoot`/`calculate_receipt_root`.

mod proofs;

pub use proofs::{receipts_root, state_root, transactions_root};

use alloy_trie::{HashBuilder, Nibbles};
use frontier_primitives::{keccak256, B256};

/// Computes the root of an *unsecured* trie: keys are inserted verbatim.
///
/// Used for the transactions and receipts tries (`spec.md` §4.2 step 4),
/// whose keys are the RLP encoding of the item's index within the block.
pub fn root<I, K, V>(entries: I) -> B256
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    build(entries.into_iter().map(|(k, v)| (k.as_ref().to_vec(), v.as_ref().to_vec())))
}

/// Computes the root of a *secured* trie: keys are keccak-hashed before
/// insertion.
///
/// Used for the world-state trie and for each account's storage trie
/// (`spec.md` §4.2 step 4 / §6).
pub fn secured_root<I, K, V>(entries: I) -> B256
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    build(entries.into_iter().map(|(k, v)| (keccak256(k.as_ref()).to_vec(), v.as_ref().to_vec())))
}

/// Builds a trie from arbitrary (key, RLP-encoded value) pairs and returns
/// its root.
///
/// `HashBuilder` requires leaves to be added in ascending key order; the
/// numeric index used for transaction/receipt keys does not RLP-encode to
/// ascending byte order past index 127 (`rlp(127) = [0x7f]` but
/// `rlp(128) = [0x81, 0x80]`, which sorts *before* single-byte keys), so
/// entries are always explicitly sorted by their final key bytes here
/// rather than relying on caller-supplied order.
fn build(entries: impl Iterator<Item = (Vec<u8>, Vec<u8>)>) -> B256 {
    let mut entries: Vec<_> = entries.collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    entries.dedup_by(|(a, _), (b, _)| a == b);

    let mut hash_builder = HashBuilder::default();
    for (key, value) in &entries {
        hash_builder.add_leaf(Nibbles::unpack(key), value);
    }
    hash_builder.root()
}
