//! Test helpers for building signed Frontier transactions.
//!
//! Mirrors `reth-testing-utils`: a deterministic way for integration tests
//! to get a funded externally-owned account and a correctly signed
//! [`Transaction`] without each test reimplementing secp256k1 signing.

use alloy_primitives::{keccak256, Address, U256};
use frontier_primitives::{Transaction, TxKind};
use secp256k1::{Message, PublicKey, SecretKey, SECP256K1};

/// A keypair standing in for an externally-owned account in tests.
pub struct TestAccount {
    /// The account's secret key.
    pub secret_key: SecretKey,
    /// The address this keypair recovers to.
    pub address: Address,
}

impl TestAccount {
    /// Generates a fresh random keypair.
    pub fn random() -> Self {
        let (secret_key, public_key) = SECP256K1.generate_keypair(&mut rand::thread_rng());
        Self { secret_key, address: public_key_to_address(&public_key) }
    }
}

fn public_key_to_address(public_key: &PublicKey) -> Address {
    let hash = keccak256(&public_key.serialize_uncompressed()[1..]);
    Address::from_slice(&hash[12..])
}

/// Builds an unsigned legacy transaction with the given fields and a zeroed
/// signature; pass the result to [`sign_transaction`].
pub fn legacy_transaction(nonce: u64, gas_price: U256, gas: u64, to: TxKind, value: U256) -> Transaction {
    Transaction {
        nonce,
        gas_price,
        gas,
        to,
        value,
        input: Default::default(),
        v: 0,
        r: U256::ZERO,
        s: U256::ZERO,
    }
}

/// Signs `tx` with `account`'s secret key, filling in `v`, `r` and `s`.
pub fn sign_transaction(account: &TestAccount, mut tx: Transaction) -> Transaction {
    let hash = tx.signing_hash();
    let message = Message::from_digest_slice(hash.as_slice()).expect("signing hash is 32 bytes");
    let signature = SECP256K1.sign_ecdsa_recoverable(&message, &account.secret_key);
    let (recovery_id, bytes) = signature.serialize_compact();

    tx.r = U256::from_be_slice(&bytes[..32]);
    tx.s = U256::from_be_slice(&bytes[32..]);
    tx.v = 27 + recovery_id.to_i32() as u64;
    tx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_transaction_recovers_to_signer() {
        let account = TestAccount::random();
        let tx = sign_transaction(
            &account,
            legacy_transaction(0, U256::from(1u64), 21000, TxKind::Call(Address::ZERO), U256::ZERO),
        );
        assert!(tx.v == 27 || tx.v == 28);
        assert!(!tx.r.is_zero());
        assert!(!tx.s.is_zero());
    }
}
