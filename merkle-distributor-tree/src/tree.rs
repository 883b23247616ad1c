use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    LeafRecord, MerkleTreeError, Result,
    hash::{Digest, combine},
    helper::next_level_len,
    leaf::encode_leaves,
};

/// A Merkle tree over distribution leaves with every level retained.
///
/// Level 0 holds the leaf digests in their original order, which defines
/// the leaf index. Each following level pairs `(2k, 2k + 1)` with
/// [`combine`]; an unpaired last node is carried up unchanged. The final
/// level holds only the root.
///
/// Levels are kept so that repeated proof generation is a lookup rather
/// than a rebuild. Total storage is below `2 * leaf_count` digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build a tree from leaf digests in index order.
    pub fn new(leaf_hashes: Vec<Digest>) -> Result<Self> {
        if leaf_hashes.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }

        let leaf_count = leaf_hashes.len();
        let mut levels = vec![leaf_hashes];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = build_next_level(level);
            levels.push(next);
        }

        let tree = MerkleTree { levels };
        debug!(
            "built merkle tree: {} leaves, height {}, root {}",
            leaf_count,
            tree.height(),
            tree.root()
        );
        Ok(tree)
    }

    /// Encode `records` and build a tree over them.
    ///
    /// Duplicate identities are allowed by the tree but are almost always a
    /// mistake in the distribution list, so each one is logged.
    pub fn from_records(records: &[LeafRecord]) -> Result<Self> {
        let mut seen: HashMap<&[u8; 32], usize> = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if let Some(previous) = seen.insert(record.identity(), index) {
                warn!(
                    "duplicate identity {} at leaf indices {} and {}",
                    hex::encode(record.identity()),
                    previous,
                    index
                );
            }
        }
        Self::new(encode_leaves(records))
    }

    /// The root digest.
    pub fn root(&self) -> Digest {
        // Construction guarantees a final level of exactly one digest.
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves; 0 for a single-leaf tree.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// All levels, from the leaves (index 0) to the root level.
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// One level, or `None` above the root.
    pub fn level(&self, depth: usize) -> Option<&[Digest]> {
        self.levels.get(depth).map(Vec::as_slice)
    }

    /// Leaf digest at `index`.
    pub fn leaf_hash(&self, index: usize) -> Option<Digest> {
        self.levels[0].get(index).copied()
    }

    /// Index of the first leaf whose digest equals `leaf_hash`.
    pub fn position_of(&self, leaf_hash: &Digest) -> Option<usize> {
        self.levels[0].iter().position(|hash| hash == leaf_hash)
    }
}

/// Pair up a level left to right, carrying an odd tail forward.
fn build_next_level(level: &[Digest]) -> Vec<Digest> {
    let mut next = Vec::with_capacity(next_level_len(level.len()));
    for pair in level.chunks(2) {
        if let [left, right] = pair {
            next.push(combine(left, right));
        } else {
            // Unpaired last node.
            next.push(pair[0]);
        }
    }
    next
}
