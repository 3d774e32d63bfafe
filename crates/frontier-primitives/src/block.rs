use crate::{Header, Transaction};
use alloy_rlp::{RlpDecodable, RlpEncodable};

/// A full Frontier block: header, ordered transactions, and ordered ommers
/// (at most 2).
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Block {
    /// The block header.
    pub header: Header,
    /// Transactions included in this block, in execution order.
    pub transactions: Vec<Transaction>,
    /// Ommer (uncle) headers included in this block.
    pub ommers: Vec<Header>,
}
