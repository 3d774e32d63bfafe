use thiserror::Error;

/// Errors raised while validating and processing a single transaction
/// (`spec.md` §7's `TxInvalid{reason}`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TxError {
    /// `state[sender].nonce != tx.nonce`.
    #[error("nonce mismatch: account has {account_nonce}, transaction has {tx_nonce}")]
    NonceMismatch {
        /// The sender's current nonce.
        account_nonce: u64,
        /// The nonce the transaction claims.
        tx_nonce: u64,
    },

    /// `state[sender].balance < tx.gas * tx.gas_price`.
    #[error("sender cannot afford gas: balance {balance}, required {required}")]
    InsufficientBalance {
        /// The sender's current balance.
        balance: alloy_primitives::U256,
        /// `tx.gas * tx.gas_price`.
        required: alloy_primitives::U256,
    },

    /// `tx.gas < intrinsic_cost(tx)`.
    #[error("gas {gas} is below the intrinsic cost {intrinsic_cost}")]
    GasBelowIntrinsicCost {
        /// The gas the transaction offers.
        gas: u64,
        /// The computed intrinsic cost.
        intrinsic_cost: u64,
    },

    /// `v`, `r` or `s` fell outside the ranges required by `spec.md` §4.4.
    #[error("signature field out of range: {0}")]
    SignatureOutOfRange(&'static str),

    /// Signature recovery itself failed (a syntactically in-range `r`/`s`
    /// that nonetheless does not recover to a valid public key).
    #[error("signature recovery failed")]
    SignatureRecoveryFailed,

    /// `tx.to` is absent: contract creation, out of scope for this engine
    /// (`spec.md` §4.3 step 3 / §9).
    #[error("contract creation is not supported")]
    UnsupportedCreation,

    /// The EVM collaborator refused the call (`spec.md` §6's `process_call`
    /// contract — this engine only honors calls into empty-code accounts).
    #[error("call failed: {0}")]
    CallFailed(String),
}

/// Errors raised while executing a block (`spec.md` §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockExecutionError {
    /// A transaction failed validation.
    #[error(transparent)]
    TxInvalid(#[from] TxError),

    /// A transaction requested more gas than remained in the block
    /// (`spec.md` §4.2 step 2a).
    #[error("transaction gas {tx_gas} exceeds available block gas {gas_available}")]
    GasOverflow {
        /// The transaction's declared gas limit.
        tx_gas: u64,
        /// The gas remaining in the block before this transaction.
        gas_available: u64,
    },

    /// A non-genesis block's `parent_hash` matched no known header
    /// (`spec.md` §4.1 step 1).
    #[error("unknown parent {0}")]
    UnknownParent(alloy_primitives::B256),
}
