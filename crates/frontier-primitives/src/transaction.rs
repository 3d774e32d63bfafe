use crate::{keccak256, Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{Decodable, Encodable, Header as RlpHeader, RlpDecodable, RlpEncodable};

/// A Frontier-era (legacy, pre-EIP-2718) signed transaction.
///
/// Frontier predates typed transactions, access lists and EIP-1559 fee
/// markets, so this is the only transaction shape the engine needs to
/// understand.
#[derive(Clone, Debug, Default, PartialEq, Eq, RlpEncodable, RlpDecodable)]
pub struct Transaction {
    /// Number of transactions previously sent by the signer.
    pub nonce: u64,
    /// Wei paid per unit of gas.
    pub gas_price: U256,
    /// Maximum units of gas this transaction may consume, including the
    /// intrinsic cost.
    pub gas: u64,
    /// Message call recipient, or [`TxKind::Create`] for contract creation.
    pub to: TxKind,
    /// Wei transferred to `to`, or endowed to the created contract.
    pub value: U256,
    /// Call input / contract init code.
    pub input: Bytes,
    /// Signature recovery id, `27` or `28` for Frontier (no EIP-155 replay
    /// protection yet).
    pub v: u64,
    /// Signature `r`.
    pub r: U256,
    /// Signature `s`.
    pub s: U256,
}

impl Transaction {
    /// The hash signed by the sender: `keccak256(rlp([nonce, gas_price,
    /// gas, to, value, input]))`, i.e. every field except the signature
    /// itself. Matches `spec.md` §4.4's `signing_hash`.
    pub fn signing_hash(&self) -> B256 {
        let fields: [&dyn Encodable; 6] =
            [&self.nonce, &self.gas_price, &self.gas, &self.to, &self.value, &self.input];
        let payload_length: usize = fields.iter().map(|f| f.length()).sum();

        let mut buf = Vec::with_capacity(payload_length + 4);
        RlpHeader { list: true, payload_length }.encode(&mut buf);
        for field in fields {
            field.encode(&mut buf);
        }
        keccak256(&buf)
    }

    /// Hash of the fully signed transaction, as inserted (keyed by index)
    /// into the per-block transactions trie.
    pub fn hash(&self) -> B256 {
        let mut buf = Vec::with_capacity(self.length());
        self.encode(&mut buf);
        keccak256(&buf)
    }
}
