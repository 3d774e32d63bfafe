use crate::{process_transaction, recover_sender, reward::pay_rewards, BlockExecutionError};
use alloy_primitives::{Address, Bloom, B256, U256};
use frontier_evm::{Environment, Evm};
use frontier_primitives::{logs_bloom, Header, Receipt, State, Transaction};

/// The per-block results the chain driver cross-checks against the header
/// (`spec.md` §4.1 step 3 / §4.2 step 6).
pub struct BodyExecutionOutcome {
    /// Total gas consumed by the block's transactions.
    pub gas_used: u64,
    /// Root of the trie of transactions, keyed by index, unsecured.
    pub transactions_root: B256,
    /// Root of the trie of receipts, keyed by index, unsecured.
    pub receipts_root: B256,
    /// Bloom filter over every log emitted in the block.
    pub logs_bloom: Bloom,
}

/// Sequences `transactions` through the transaction processor, accumulates
/// receipts, pays block/ommer rewards and computes the transactions and
/// receipts commitment roots (`spec.md` §4.2). Mutates `state` in place;
/// the caller computes `trie_root(state)` separately once this returns
/// (the state root is checked against the header by the chain driver, not
/// here, since it needs no intermediate receipts data).
#[allow(clippy::too_many_arguments)]
pub fn execute_body(
    evm: &impl Evm,
    state: &mut State,
    block_hashes: &[B256],
    coinbase: Address,
    number: u64,
    gas_limit: u64,
    timestamp: u64,
    difficulty: U256,
    transactions: &[Transaction],
    ommers: &[Header],
) -> Result<BodyExecutionOutcome, BlockExecutionError> {
    tracing::debug!(
        target: "frontier::execution",
        number,
        transactions = transactions.len(),
        ommers = ommers.len(),
        "execute_body"
    );

    let mut gas_available = gas_limit;
    let mut receipts = Vec::with_capacity(transactions.len());
    let mut block_logs = Vec::new();

    for tx in transactions {
        if tx.gas > gas_available {
            return Err(BlockExecutionError::GasOverflow { tx_gas: tx.gas, gas_available });
        }

        let sender = recover_sender(tx)?;
        let mut env = Environment {
            origin: sender,
            coinbase,
            number,
            gas_limit,
            gas_price: tx.gas_price,
            timestamp,
            difficulty,
            block_hashes,
            state,
        };

        let processed = process_transaction(evm, &mut env, sender, tx)?;
        gas_available -= processed.gas_used;

        let post_state = frontier_trie::state_root(state);
        let cumulative_gas_used = gas_limit - gas_available;
        let bloom = logs_bloom(&processed.logs);

        receipts.push(Receipt {
            post_state,
            cumulative_gas_used,
            bloom,
            logs: processed.logs.clone(),
        });
        block_logs.extend(processed.logs);
    }

    if number != 0 {
        pay_rewards(state, coinbase, number, ommers);
    }

    Ok(BodyExecutionOutcome {
        gas_used: gas_limit - gas_available,
        transactions_root: frontier_trie::transactions_root(transactions),
        receipts_root: frontier_trie::receipts_root(&receipts),
        logs_bloom: logs_bloom(&block_logs),
    })
}
