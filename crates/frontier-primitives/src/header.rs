use crate::{keccak256, Address, Bloom, Bytes, B256, B64, U256};
use alloy_rlp::{Decodable, Encodable, RlpDecodable, RlpEncodable};

/// A Frontier block header.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Header {
    /// Hash of the parent block's header.
    pub parent_hash: B256,
    /// Hash of the RLP-encoded ommers list, see [`ommers_hash`].
    pub ommers_hash: B256,
    /// Address credited with this block's reward and transaction fees.
    pub beneficiary: Address,
    /// Root of the state trie after executing this block.
    pub state_root: B256,
    /// Root of the trie of this block's transactions.
    pub transactions_root: B256,
    /// Root of the trie of this block's receipts.
    pub receipts_root: B256,
    /// Bloom filter over every log emitted by this block's transactions.
    pub logs_bloom: Bloom,
    /// Proof-of-work difficulty target.
    pub difficulty: U256,
    /// Number of ancestor blocks; the genesis block is number `0`.
    pub number: u64,
    /// Current limit of gas expenditure per block.
    pub gas_limit: u64,
    /// Total gas used by transactions in this block.
    pub gas_used: u64,
    /// Unix timestamp at block inception.
    pub timestamp: u64,
    /// Arbitrary data, at most 32 bytes.
    pub extra_data: Bytes,
    /// Ethash mix digest.
    pub mix_hash: B256,
    /// Ethash nonce.
    pub nonce: B64,
}

impl Header {
    /// Computes `keccak256(rlp(self))`.
    ///
    /// Named `hash_slow` (as opposed to a cached field) because this crate
    /// keeps headers unsealed; callers that need the hash repeatedly should
    /// wrap the header in a [`SealedHeader`], the way the teacher repo's
    /// `SealedHeader` avoids recomputing `Header::hash_slow` on every access.
    pub fn hash_slow(&self) -> B256 {
        let mut buf = Vec::with_capacity(self.length());
        self.encode(&mut buf);
        keccak256(&buf)
    }

    /// Seals the header with its own computed hash.
    pub fn seal_slow(self) -> SealedHeader {
        let hash = self.hash_slow();
        SealedHeader { header: self, hash }
    }
}

/// A [`Header`] paired with its precomputed hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedHeader {
    header: Header,
    hash: B256,
}

impl SealedHeader {
    /// Pairs a header with a hash the caller has already verified matches
    /// it. No validation is performed here.
    pub const fn new(header: Header, hash: B256) -> Self {
        Self { header, hash }
    }

    /// The header's own hash.
    pub const fn hash(&self) -> B256 {
        self.hash
    }

    /// Unseals back into a plain [`Header`].
    pub fn unseal(self) -> Header {
        self.header
    }
}

impl std::ops::Deref for SealedHeader {
    type Target = Header;

    fn deref(&self) -> &Header {
        &self.header
    }
}

/// Computes the hash binding a block to its ommers: `keccak256(rlp(ommers))`.
///
/// Used both to populate `Header::ommers_hash` when building a block and to
/// validate it in `frontier-consensus`'s ommer validator.
pub fn ommers_hash(ommers: &[Header]) -> B256 {
    let mut buf = Vec::with_capacity(ommers.length());
    ommers.encode(&mut buf);
    keccak256(&buf)
}
