use crate::OmmerError;
use frontier_primitives::{ommers_hash, GotExpected, Header, B256};

/// One ancestor header consulted while validating an ommer's sibling
/// discipline: the ancestor at the ommer's claimed depth, keyed by its own
/// hash and its parent's hash.
pub struct CanonicalAncestor {
    /// Hash of this ancestor header.
    pub hash: B256,
    /// Hash of this ancestor's parent.
    pub parent_hash: B256,
}

/// Validates `ommers` against `header.ommers_hash` and the block number
/// (`spec.md` §4.7).
///
/// `ancestor_at_depth(age)` must return the canonical ancestor `age` blocks
/// behind the block under validation (i.e. `chain.blocks[len - age]`); the
/// chain driver supplies this since only it has the full block sequence.
pub fn validate_ommers(
    ommers: &[Header],
    expected_ommers_hash: B256,
    block_number: u64,
    ancestor_at_depth: impl Fn(u64) -> Option<CanonicalAncestor>,
) -> Result<(), OmmerError> {
    if ommers.len() > 2 {
        return Err(OmmerError::TooManyOmmers { count: ommers.len() });
    }

    GotExpected::ensure(ommers_hash(ommers), expected_ommers_hash)
        .map_err(OmmerError::HashMismatch)?;

    for ommer in ommers {
        let age = block_number.saturating_sub(ommer.number);
        if !(1..=6).contains(&age) {
            return Err(OmmerError::AgeOutOfWindow { age });
        }

        let ancestor = ancestor_at_depth(age).ok_or(OmmerError::AgeOutOfWindow { age })?;
        let hash = ommer.hash_slow();

        if hash == ancestor.hash {
            return Err(OmmerError::IdenticalToCanonicalAncestor);
        }
        if ommer.parent_hash != ancestor.parent_hash {
            return Err(OmmerError::NotASibling);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(number: u64, parent_hash: B256) -> Header {
        Header { number, parent_hash, ..Default::default() }
    }

    #[test]
    fn valid_sibling_ommer_is_accepted() {
        // Block 10 with an ommer at number 7 (age 3), sibling of the canonical
        // ancestor at depth 3 -- matches S7.
        let canonical_parent_hash = B256::repeat_byte(0xaa);
        let ommer = header(7, canonical_parent_hash);
        let ommers = vec![ommer.clone()];
        let expected_hash = ommers_hash(&ommers);

        let canonical_ancestor_hash = B256::repeat_byte(0xbb);
        let result = validate_ommers(&ommers, expected_hash, 10, |age| {
            assert_eq!(age, 3);
            Some(CanonicalAncestor {
                hash: canonical_ancestor_hash,
                parent_hash: canonical_parent_hash,
            })
        });
        assert!(result.is_ok());
    }

    #[test]
    fn ommer_identical_to_canonical_ancestor_is_rejected() {
        let parent_hash = B256::repeat_byte(0xaa);
        let ommer = header(7, parent_hash);
        let ommers = vec![ommer.clone()];
        let expected_hash = ommers_hash(&ommers);
        let ommer_hash = ommer.hash_slow();

        let result = validate_ommers(&ommers, expected_hash, 10, |_| {
            Some(CanonicalAncestor { hash: ommer_hash, parent_hash })
        });
        assert_eq!(result, Err(OmmerError::IdenticalToCanonicalAncestor));
    }

    #[test]
    fn ommer_age_out_of_window_is_rejected() {
        // S7: ommer number = 3 on a block 10 has age 7, outside [1, 6].
        let ommer = header(3, B256::ZERO);
        let ommers = vec![ommer.clone()];
        let expected_hash = ommers_hash(&ommers);

        let result = validate_ommers(&ommers, expected_hash, 10, |_| None);
        assert_eq!(result, Err(OmmerError::AgeOutOfWindow { age: 7 }));
    }

    #[test]
    fn too_many_ommers_is_rejected() {
        let ommers = vec![header(1, B256::ZERO), header(2, B256::ZERO), header(3, B256::ZERO)];
        let result = validate_ommers(&ommers, B256::ZERO, 10, |_| None);
        assert_eq!(result, Err(OmmerError::TooManyOmmers { count: 3 }));
    }
}
