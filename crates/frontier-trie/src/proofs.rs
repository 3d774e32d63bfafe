use crate::{root, secured_root};
use alloy_rlp::{Encodable, Header as RlpHeader};
use frontier_primitives::{keccak256, Account, Receipt, State, Transaction, B256};

/// Computes the world-state root (`spec.md` §4.2 step 4 / §9).
///
/// Each account is stored under its keccak-hashed address (a *secured*
/// trie), RLP-encoded as `[nonce, balance, storage_root, code_hash]` —
/// the Yellow Paper's account leaf shape. `storage_root` is itself a
/// secured trie over the account's own storage, keyed by slot and valued
/// by the RLP encoding of the stored `U256`.
pub fn state_root(state: &State) -> B256 {
    let entries = state.iter().map(|(address, account)| {
        (address.as_slice().to_vec(), encode_account(account))
    });
    secured_root(entries)
}

fn encode_account(account: &Account) -> Vec<u8> {
    let storage_root = account_storage_root(account);
    let code_hash = keccak256(account.code.as_ref());

    let fields: [&dyn Encodable; 4] = [&account.nonce, &account.balance, &storage_root, &code_hash];
    let payload_length: usize = fields.iter().map(|f| f.length()).sum();

    let mut buf = Vec::with_capacity(payload_length + 4);
    RlpHeader { list: true, payload_length }.encode(&mut buf);
    for field in fields {
        field.encode(&mut buf);
    }
    buf
}

fn account_storage_root(account: &Account) -> B256 {
    let entries = account.storage.iter().filter(|(_, value)| !value.is_zero()).map(|(slot, value)| {
        let mut encoded_value = Vec::new();
        value.encode(&mut encoded_value);
        (slot.as_slice().to_vec(), encoded_value)
    });
    secured_root(entries)
}

/// Computes the transactions root (`spec.md` §4.2 step 4): an unsecured
/// trie keyed by `rlp(index)`, valued by the fully signed RLP encoding of
/// each transaction.
pub fn transactions_root(transactions: &[Transaction]) -> B256 {
    let entries = transactions.iter().enumerate().map(|(index, tx)| {
        let mut encoded_value = Vec::with_capacity(tx.length());
        tx.encode(&mut encoded_value);
        (encode_index(index), encoded_value)
    });
    root(entries)
}

/// Computes the receipts root (`spec.md` §4.2 step 4): an unsecured trie
/// keyed by `rlp(index)`, valued by the RLP encoding of each receipt.
pub fn receipts_root(receipts: &[Receipt]) -> B256 {
    let entries = receipts.iter().enumerate().map(|(index, receipt)| {
        let mut encoded_value = Vec::with_capacity(receipt.length());
        receipt.encode(&mut encoded_value);
        (encode_index(index), encoded_value)
    });
    root(entries)
}

fn encode_index(index: usize) -> Vec<u8> {
    let mut encoded_key = Vec::new();
    (index as u64).encode(&mut encoded_key);
    encoded_key
}
