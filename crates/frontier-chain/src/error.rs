use frontier_execution::BlockExecutionError;
use thiserror::Error;

/// Top-level error returned by [`crate::state_transition`], aggregating the
/// consensus and execution error families (`spec.md` §7).
///
/// Mirrors the teacher's `reth-errors` crate, which aggregates
/// `reth-consensus`'s `ConsensusError` and `reth-execution-errors`'s
/// `BlockExecutionError` into one `RethError` the chain driver returns.
#[derive(Debug, Error)]
pub enum FrontierError {
    /// A header or ommer failed consensus validation, or a post-execution
    /// commitment (gas used, a trie root, or the logs bloom) did not match
    /// the header (`spec.md` §4.1 step 3).
    #[error(transparent)]
    Consensus(#[from] frontier_consensus::ConsensusError),

    /// Block execution itself failed: an invalid transaction, a gas
    /// overflow, an unsupported operation, or an unresolvable parent.
    #[error(transparent)]
    Execution(#[from] BlockExecutionError),
}
