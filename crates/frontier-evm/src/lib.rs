//! The EVM call collaborator.
//!
//! `spec.md` §6 fixes `process_call`'s contract (move value, run the target's
//! code, honor gas accounting, emit logs, revert cleanly) but puts the
//! bytecode interpreter itself out of scope — "enormous but orthogonal". This
//! crate implements exactly the slice of that contract every seed scenario in
//! `spec.md` §8 exercises: a value transfer to an externally-owned account
//! (empty code). A call into an account that carries code is refused rather
//! than silently mis-executed; wiring in a real interpreter (e.g. `revm`) is
//! the natural extension point, noted in `DESIGN.md`.

use frontier_primitives::{Address, Bytes, Log, State, StateExt, B256, U256};
use thiserror::Error;

/// The execution environment a call runs against (`spec.md` §6's `env`).
///
/// Borrows the state mutably for the duration of the call, matching the
/// Python reference's `process_call(..., env)` where `env.state` is the
/// single mutable world state threaded through every call frame.
pub struct Environment<'a> {
    /// Transaction origin; equal to `caller` for a top-level call (no
    /// `CALL`/`DELEGATECALL` distinction exists without an interpreter).
    pub origin: Address,
    /// Address credited with the block's reward and fees.
    pub coinbase: Address,
    /// Number of the block this call executes within.
    pub number: u64,
    /// Gas limit of the enclosing block.
    pub gas_limit: u64,
    /// Gas price of the enclosing transaction.
    pub gas_price: U256,
    /// Unix timestamp of the enclosing block.
    pub timestamp: u64,
    /// Difficulty of the enclosing block.
    pub difficulty: U256,
    /// Up to 256 ancestor hashes, newest-last, as produced by the
    /// block-hash window (`spec.md` §4.8).
    pub block_hashes: &'a [B256],
    /// The world state, mutated in place by the call.
    pub state: &'a mut State,
}

/// Failures `Evm::call` can report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvmError {
    /// The call target carries bytecode; executing it requires a bytecode
    /// interpreter, which is out of scope for this engine (`spec.md` §1).
    #[error("call target {0} carries code, which this engine cannot execute")]
    UnsupportedCode(Address),
}

/// Result of a completed call: remaining gas and logs emitted in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOutcome {
    /// Gas remaining after the call.
    pub gas_left: u64,
    /// Logs emitted during the call, in emission order.
    pub logs: Vec<Log>,
}

/// The `process_call` collaborator (`spec.md` §6).
pub trait Evm {
    /// Executes a message call: transfers `value` from `caller` to `target`,
    /// runs `target`'s code against `data`, and returns the gas remaining
    /// and any logs emitted.
    fn call(
        &self,
        env: &mut Environment<'_>,
        caller: Address,
        target: Address,
        data: &Bytes,
        value: U256,
        gas: u64,
    ) -> Result<CallOutcome, EvmError>;
}

/// The minimal EVM this engine ships: moves value and emits no logs when
/// the target account carries no code, which is every call the seed
/// scenarios of `spec.md` §8 perform.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrontierEvm;

impl Evm for FrontierEvm {
    fn call(
        &self,
        env: &mut Environment<'_>,
        caller: Address,
        target: Address,
        _data: &Bytes,
        value: U256,
        gas: u64,
    ) -> Result<CallOutcome, EvmError> {
        frontier_primitives::move_ether(env.state, caller, target, value);

        let account = env.state.account(target);
        if !account.code.is_empty() {
            return Err(EvmError::UnsupportedCode(target));
        }

        tracing::trace!(target: "frontier::evm", %caller, %target, %value, gas, "executed trivial call");
        Ok(CallOutcome { gas_left: gas, logs: Vec::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_primitives::Account;

    #[test]
    fn transfers_value_between_empty_accounts() {
        let mut state = State::new();
        let sender = Address::repeat_byte(0x11);
        let recipient = Address::repeat_byte(0x22);
        state.insert(sender, Account { balance: U256::from(100u64), ..Account::empty() });

        let hashes: Vec<B256> = Vec::new();
        let mut env = Environment {
            origin: sender,
            coinbase: Address::ZERO,
            number: 1,
            gas_limit: 5_000_000,
            gas_price: U256::from(1u64),
            timestamp: 0,
            difficulty: U256::ZERO,
            block_hashes: &hashes,
            state: &mut state,
        };

        let outcome =
            FrontierEvm.call(&mut env, sender, recipient, &Bytes::new(), U256::from(40u64), 21000).unwrap();

        assert_eq!(outcome.gas_left, 21000);
        assert!(outcome.logs.is_empty());
        assert_eq!(state.account(sender).balance, U256::from(60u64));
        assert_eq!(state.account(recipient).balance, U256::from(40u64));
    }

    #[test]
    fn refuses_calls_into_code() {
        let mut state = State::new();
        let target = Address::repeat_byte(0x33);
        state.insert(target, Account { code: Bytes::from_static(&[0x00]), ..Account::empty() });

        let hashes: Vec<B256> = Vec::new();
        let mut env = Environment {
            origin: Address::ZERO,
            coinbase: Address::ZERO,
            number: 1,
            gas_limit: 5_000_000,
            gas_price: U256::from(1u64),
            timestamp: 0,
            difficulty: U256::ZERO,
            block_hashes: &hashes,
            state: &mut state,
        };

        let result = FrontierEvm.call(&mut env, Address::ZERO, target, &Bytes::new(), U256::ZERO, 21000);
        assert_eq!(result, Err(EvmError::UnsupportedCode(target)));
    }
}
