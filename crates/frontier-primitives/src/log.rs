use crate::{Address, Bytes, B256};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// An event emitted by contract code during a call.
///
/// Logs are immutable once emitted: the EVM collaborator accumulates them
/// for the duration of a call frame and they are only ever appended to, per
/// `spec.md` §3.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Log {
    /// Address of the contract that emitted this log.
    pub address: Address,
    /// Indexed topics, at most 4, most specific first (event signature
    /// hash, then indexed event arguments).
    pub topics: Vec<B256>,
    /// Non-indexed event data.
    pub data: Bytes,
}
