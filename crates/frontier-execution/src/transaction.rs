use crate::TxError;
use frontier_chainspec::SECP256K1N;
use frontier_evm::{Environment, Evm};
use frontier_primitives::{keccak256, Address, StateExt, Transaction, TxKind};
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

/// `intrinsic_cost(tx)` from `spec.md` §4.3: `21000` plus `4` gas per
/// zero data byte and `68` gas per non-zero data byte.
pub fn intrinsic_cost(tx: &Transaction) -> u64 {
    const TX_BASE_COST: u64 = 21_000;
    const ZERO_BYTE_COST: u64 = 4;
    const NONZERO_BYTE_COST: u64 = 68;

    let data_cost = tx
        .input
        .iter()
        .map(|&byte| if byte == 0 { ZERO_BYTE_COST } else { NONZERO_BYTE_COST })
        .sum::<u64>();

    TX_BASE_COST + data_cost
}

/// Recovers the sender of a signed transaction (`spec.md` §4.4).
pub fn recover_sender(tx: &Transaction) -> Result<Address, TxError> {
    if tx.v != 27 && tx.v != 28 {
        return Err(TxError::SignatureOutOfRange("v must be 27 or 28"));
    }
    if tx.r.is_zero() || tx.r >= SECP256K1N {
        return Err(TxError::SignatureOutOfRange("r must lie in (0, n)"));
    }
    if tx.s.is_zero() || tx.s >= SECP256K1N {
        return Err(TxError::SignatureOutOfRange("s must lie in (0, n)"));
    }

    let mut signature_bytes = [0u8; 64];
    signature_bytes[..32].copy_from_slice(&tx.r.to_be_bytes::<32>());
    signature_bytes[32..].copy_from_slice(&tx.s.to_be_bytes::<32>());

    let recovery_id =
        RecoveryId::from_i32((tx.v - 27) as i32).map_err(|_| TxError::SignatureRecoveryFailed)?;
    let signature = RecoverableSignature::from_compact(&signature_bytes, recovery_id)
        .map_err(|_| TxError::SignatureRecoveryFailed)?;
    let message = Message::from_digest_slice(tx.signing_hash().as_slice())
        .map_err(|_| TxError::SignatureRecoveryFailed)?;

    let public_key = SECP256K1
        .recover_ecdsa(&message, &signature)
        .map_err(|_| TxError::SignatureRecoveryFailed)?;

    let hash = keccak256(&public_key.serialize_uncompressed()[1..]);
    Ok(Address::from_slice(&hash[12..]))
}

/// Result of processing one transaction: gas consumed and logs emitted.
pub struct ProcessedTransaction {
    /// Gas the transaction actually consumed, including its intrinsic cost.
    pub gas_used: u64,
    /// Logs emitted during the call.
    pub logs: Vec<frontier_primitives::Log>,
}

/// Validates and executes one transaction against `env` (`spec.md` §4.3).
///
/// `sender` must already have been recovered via [`recover_sender`]; the
/// caller threads it through so the body executor can reuse it when
/// building the environment.
pub fn process_transaction(
    evm: &impl Evm,
    env: &mut Environment<'_>,
    sender: Address,
    tx: &Transaction,
) -> Result<ProcessedTransaction, TxError> {
    tracing::trace!(target: "frontier::execution", %sender, nonce = tx.nonce, gas = tx.gas, "process_transaction");

    let account = env.state.account(sender);
    if account.nonce != tx.nonce {
        return Err(TxError::NonceMismatch { account_nonce: account.nonce, tx_nonce: tx.nonce });
    }

    let cost = intrinsic_cost(tx);
    if tx.gas < cost {
        return Err(TxError::GasBelowIntrinsicCost { gas: tx.gas, intrinsic_cost: cost });
    }

    let required = tx.gas_price.saturating_mul(alloy_primitives::U256::from(tx.gas));
    if account.balance < required {
        return Err(TxError::InsufficientBalance { balance: account.balance, required });
    }

    let gas = tx.gas - cost;

    let target = match tx.to {
        TxKind::Call(address) => address,
        TxKind::Create => return Err(TxError::UnsupportedCreation),
    };

    let outcome = evm
        .call(env, sender, target, &tx.input, tx.value, gas)
        .map_err(|error| TxError::CallFailed(error.to_string()))?;

    let gas_used = gas - outcome.gas_left + cost;
    let fee = tx.gas_price.saturating_mul(alloy_primitives::U256::from(gas_used));
    frontier_primitives::move_ether(env.state, sender, env.coinbase, fee);
    env.state.modify(sender, |account| account.nonce += 1);

    Ok(ProcessedTransaction { gas_used, logs: outcome.logs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrinsic_cost_matches_empty_data_floor() {
        let tx = Transaction::default();
        assert_eq!(intrinsic_cost(&tx), 21_000);
    }

    #[test]
    fn intrinsic_cost_charges_per_data_byte() {
        let tx = Transaction { input: vec![0x00, 0x01, 0x02].into(), ..Default::default() };
        // one zero byte (4) + two non-zero bytes (68 * 2)
        assert_eq!(intrinsic_cost(&tx), 21_000 + 4 + 68 * 2);
    }
}
