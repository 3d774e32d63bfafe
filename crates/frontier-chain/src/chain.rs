use frontier_consensus::CanonicalAncestor;
use frontier_primitives::{Block, Header, State, B256};
use std::collections::HashMap;

/// An ordered sequence of validated blocks plus the world state they
/// produced (`spec.md` §3's `BlockChain`).
///
/// `blocks[i].header.number == i` is maintained by construction: the only
/// way to grow a `BlockChain` is [`crate::state_transition`], which checks
/// that invariant before appending.
#[derive(Debug, Default)]
pub struct BlockChain {
    blocks: Vec<Block>,
    /// Maps a header's own hash to its index in `blocks`, so parent lookup
    /// (`spec.md` §4.1 step 1) doesn't have to rescan the whole chain on
    /// every block, per the `DESIGN.md` note on `spec.md` §9's "an
    /// implementation at mainnet scale must index headers by hash".
    hash_index: HashMap<B256, usize>,
    /// The current world state, mutated only by a successful
    /// [`crate::state_transition`].
    pub state: State,
}

impl BlockChain {
    /// An empty chain with no blocks and an empty state, ready to accept a
    /// genesis block via [`crate::state_transition`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain's blocks, in ascending block-number order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The number of blocks appended so far, i.e. the block number the next
    /// block must carry.
    pub fn len(&self) -> u64 {
        self.blocks.len() as u64
    }

    /// Whether the chain has no blocks yet.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The header whose own hash equals `hash`, if any block on the chain
    /// carries it.
    pub fn header_by_hash(&self, hash: B256) -> Option<&Header> {
        self.hash_index.get(&hash).map(|&index| &self.blocks[index].header)
    }

    /// The canonical ancestor `age` blocks behind the block about to be
    /// appended, for the ommer validator (`spec.md` §4.7).
    ///
    /// `age` is relative to the *next* block, whose number equals
    /// `self.len()`, so the ancestor sits at index `self.len() - age` in the
    /// already-appended chain.
    pub fn ancestor_at_depth(&self, age: u64) -> Option<CanonicalAncestor> {
        let index = self.len().checked_sub(age)?;
        let header = &self.blocks.get(index as usize)?.header;
        Some(CanonicalAncestor { hash: header.hash_slow(), parent_hash: header.parent_hash })
    }

    /// Appends `block` to the chain, indexing its header hash.
    ///
    /// Only [`crate::state_transition`] calls this, and only after every
    /// validation and commitment check has passed.
    pub(crate) fn push(&mut self, block: Block, header_hash: B256) {
        self.hash_index.insert(header_hash, self.blocks.len());
        self.blocks.push(block);
    }
}
