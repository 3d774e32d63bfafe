//! Transaction processing and block execution for the Frontier
//! state-transition engine.
//!
//! Implements `spec.md` §4.2 (body executor) and §4.3 (transaction
//! processor), including intrinsic-cost accounting, signature recovery
//! (§4.4) and reward payment (§4.5). Header and ommer validation live in
//! `frontier-consensus`; assembling these into the full `state_transition`
//! pure function is `frontier-chain`'s job.

mod body;
mod error;
mod reward;
mod transaction;

pub use body::{execute_body, BodyExecutionOutcome};
pub use error::{BlockExecutionError, TxError};
pub use reward::pay_rewards;
pub use transaction::{intrinsic_cost, process_transaction, recover_sender, ProcessedTransaction};
