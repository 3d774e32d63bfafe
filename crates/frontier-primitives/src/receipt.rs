use crate::{Bloom, Log, B256};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// The receipt emitted for one executed transaction.
///
/// Frontier receipts carry the post-transaction state root rather than the
/// EIP-658 success flag introduced in Byzantium; this engine's scope ends
/// before that fork, so `post_state` is always populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Receipt {
    /// Root of the state trie immediately after this transaction executed.
    pub post_state: B256,
    /// Total gas used by this transaction and all before it in the block.
    pub cumulative_gas_used: u64,
    /// Bloom filter over this transaction's logs.
    pub bloom: Bloom,
    /// Logs emitted by this transaction, in emission order.
    pub logs: Vec<Log>,
}
