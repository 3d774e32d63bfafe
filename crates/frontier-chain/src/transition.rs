use crate::{block_hashes::block_hash_window, BlockChain, FrontierError};
use frontier_chainspec::Genesis;
use frontier_consensus::{validate_genesis_header, validate_header, validate_ommers};
use frontier_evm::FrontierEvm;
use frontier_execution::{execute_body, BlockExecutionError};
use frontier_primitives::{Account, Block, GotExpected};

/// Applies one block to `chain` (`spec.md` §4.1).
///
/// Validates `block`'s header (against its parent, or against `genesis` if
/// `block.header.number == 0`), executes its body, cross-checks every
/// commitment the header claims, validates its ommers, and — only if every
/// check passes — appends it to `chain` and commits the resulting state.
///
/// Mirrors the teacher's `Consensus::validate_block_pre_execution` /
/// `BlockExecutor::execute` / post-execution `validate_block_post_execution`
/// split, fused into the single pure function `spec.md` specifies. On any
/// error the chain and its state are left exactly as they were: execution
/// runs against a clone of `chain.state` (`spec.md` §9's copy-on-write
/// overlay) that is only written back on success.
pub fn state_transition(
    chain: &mut BlockChain,
    block: Block,
    genesis: &Genesis,
) -> Result<(), FrontierError> {
    tracing::debug!(target: "frontier::chain", number = block.header.number, "state_transition");
    let mut state = chain.state.clone();

    if block.header.number == 0 {
        validate_genesis_header(&block.header, genesis)?;
        for (&address, genesis_account) in &genesis.alloc {
            state.insert(address, Account { balance: genesis_account.balance, ..Account::empty() });
        }
    } else {
        let parent = chain
            .header_by_hash(block.header.parent_hash)
            .ok_or(BlockExecutionError::UnknownParent(block.header.parent_hash))?
            .clone();
        validate_header(&block.header, &parent)?;
    }

    let headers: Vec<_> = chain.blocks().iter().map(|b| b.header.clone()).collect();
    let block_hashes = block_hash_window(&headers);

    let evm = FrontierEvm;
    let outcome = execute_body(
        &evm,
        &mut state,
        &block_hashes,
        block.header.beneficiary,
        block.header.number,
        block.header.gas_limit,
        block.header.timestamp,
        block.header.difficulty,
        &block.transactions,
        &block.ommers,
    )?;

    GotExpected::ensure(outcome.gas_used, block.header.gas_used)
        .map_err(frontier_consensus::ConsensusError::GasUsedMismatch)?;
    GotExpected::ensure(outcome.transactions_root, block.header.transactions_root)
        .map_err(frontier_consensus::ConsensusError::TransactionsRootMismatch)?;
    GotExpected::ensure(outcome.receipts_root, block.header.receipts_root)
        .map_err(frontier_consensus::ConsensusError::ReceiptsRootMismatch)?;
    GotExpected::ensure(outcome.logs_bloom, block.header.logs_bloom)
        .map_err(frontier_consensus::ConsensusError::LogsBloomMismatch)?;

    let state_root = frontier_trie::state_root(&state);
    GotExpected::ensure(state_root, block.header.state_root)
        .map_err(frontier_consensus::ConsensusError::StateRootMismatch)?;

    validate_ommers(&block.ommers, block.header.ommers_hash, block.header.number, |age| {
        chain.ancestor_at_depth(age)
    })?;

    let header_hash = block.header.hash_slow();
    chain.state = state;
    chain.push(block, header_hash);

    tracing::debug!(target: "frontier::chain", %header_hash, "applied block");
    Ok(())
}
