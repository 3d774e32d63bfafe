use frontier_primitives::{Bloom, GotExpected, B256};
use thiserror::Error;

/// Top-level consensus error, aggregating header validation, ommer
/// validation and the post-execution commitment checks of `spec.md` §4.1
/// step 3 into the three families named by `spec.md` §7: `HeaderInvalid`,
/// `OmmerInvalid`, and the `CommitmentMismatch` family.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConsensusError {
    /// The header failed validation against its parent or, for the genesis
    /// block, against the configured chain constants.
    #[error(transparent)]
    HeaderInvalid(#[from] HeaderError),

    /// A block's ommers failed validation against its header.
    #[error(transparent)]
    OmmerInvalid(#[from] OmmerError),

    /// Computed gas used did not match `header.gas_used`.
    #[error("gas used mismatch: {0}")]
    GasUsedMismatch(GotExpected<u64>),

    /// Computed transactions root did not match `header.transactions_root`.
    #[error("transactions root mismatch: {0}")]
    TransactionsRootMismatch(GotExpected<B256>),

    /// Computed receipts root did not match `header.receipts_root`.
    #[error("receipts root mismatch: {0}")]
    ReceiptsRootMismatch(GotExpected<B256>),

    /// Computed state root did not match `header.state_root`.
    #[error("state root mismatch: {0}")]
    StateRootMismatch(GotExpected<B256>),

    /// Computed logs bloom did not match `header.logs_bloom`.
    #[error("logs bloom mismatch: {0}")]
    LogsBloomMismatch(GotExpected<Bloom>),
}

/// Errors raised while validating a header against its parent.
///
/// Mirrors `spec.md` §7's `HeaderInvalid{reason}`: each variant here is one
/// concrete `reason` the abstract kind can take.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum HeaderError {
    /// `header.difficulty` did not match `calculate_difficulty` (`spec.md`
    /// §4.6).
    #[error("difficulty mismatch: {0}")]
    Difficulty(GotExpected<alloy_primitives::U256>),

    /// `header.gas_limit` fell outside `[parent.gas_limit - delta, parent.gas_limit +
    /// delta)` or below the protocol floor (`spec.md` §4.6's `check_gas_limit`).
    #[error("gas limit {gas_limit} out of bounds for parent gas limit {parent_gas_limit}")]
    GasLimitOutOfBounds {
        /// The header's gas limit.
        gas_limit: u64,
        /// The parent header's gas limit.
        parent_gas_limit: u64,
    },

    /// `header.timestamp` did not strictly increase over the parent's.
    #[error("timestamp {timestamp} does not exceed parent timestamp {parent_timestamp}")]
    TimestampNotMonotonic {
        /// The header's timestamp.
        timestamp: u64,
        /// The parent header's timestamp.
        parent_timestamp: u64,
    },

    /// `header.number != parent.number + 1`.
    #[error("block number mismatch: {0}")]
    NumberDiscontinuous(GotExpected<u64>),

    /// `header.extra_data` exceeded 32 bytes.
    #[error("extra data is {len} bytes, exceeding the 32 byte limit")]
    ExtraDataTooLong {
        /// The actual length of `extra_data`, in bytes.
        len: usize,
    },

    /// A field of the genesis header did not match the configured mainnet
    /// constants (`spec.md` §4.6's genesis special case).
    #[error("genesis header field mismatch: {field}: {detail}")]
    GenesisFieldMismatch {
        /// Name of the mismatched field.
        field: &'static str,
        /// Human-readable got/expected detail.
        detail: String,
    },

    /// Proof-of-work verification failed.
    ///
    /// `spec.md` §4.6/§9: Ethash verification is a required check point
    /// whose algorithm is explicitly out of this core's scope, so this
    /// variant exists for completeness but is never returned by
    /// [`crate::validate_header`] — see `DESIGN.md`.
    #[error("proof of work invalid")]
    ProofOfWorkInvalid,
}

/// Errors raised while validating a block's ommers against its header.
///
/// Mirrors `spec.md` §7's `OmmerInvalid{reason}`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum OmmerError {
    /// More than two ommers were included in a block.
    #[error("block has {count} ommers, exceeding the limit of 2")]
    TooManyOmmers {
        /// The number of ommers included.
        count: usize,
    },

    /// `keccak256(rlp(ommers))` did not match `header.ommers_hash`.
    #[error("ommers hash mismatch: {0}")]
    HashMismatch(GotExpected<alloy_primitives::B256>),

    /// An ommer's age (`block.number - ommer.number`) fell outside `[1, 6]`.
    #[error("ommer age {age} out of the [1, 6] window")]
    AgeOutOfWindow {
        /// The ommer's age relative to the current block.
        age: u64,
    },

    /// An ommer was identical to the canonical ancestor at its depth.
    #[error("ommer is identical to the canonical ancestor at its depth")]
    IdenticalToCanonicalAncestor,

    /// An ommer's `parent_hash` did not match the canonical ancestor's
    /// parent, so it is not a sibling of any ancestor on the canonical
    /// chain.
    #[error("ommer is not a sibling of any canonical ancestor")]
    NotASibling,
}
