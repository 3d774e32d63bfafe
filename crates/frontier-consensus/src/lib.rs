//! Header and ommer validation for the Frontier state-transition engine.
//!
//! Implements `spec.md` §4.6 (header validator) and §4.7 (ommer validator).
//! Both operate on already-decoded [`frontier_primitives::Header`] values;
//! resolving a block's parent by hash and walking the canonical chain for
//! ommer ancestors is the chain driver's job (`frontier-chain`), since only
//! it holds the full block sequence.

mod error;
mod header;
mod ommer;

pub use error::{ConsensusError, HeaderError, OmmerError};
pub use header::{calculate_difficulty, check_gas_limit, validate_genesis_header, validate_header};
pub use ommer::{validate_ommers, CanonicalAncestor};
