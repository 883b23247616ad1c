//! Inclusion proof generation.
//!
//! A proof is the list of sibling digests on the path from one leaf to the
//! root, ordered leaf-ward first. Levels on which the path node was the
//! unpaired last element contribute nothing, so a proof can be shorter
//! than the tree height.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    MerkleTree, MerkleTreeError, Result,
    hash::{DIGEST_LEN, Digest},
    helper::sibling_index,
};

/// An inclusion proof for a single leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proof {
    siblings: Vec<Digest>,
}

impl Proof {
    /// Construct a proof from sibling digests in root-ward order.
    pub fn new(siblings: Vec<Digest>) -> Self {
        Proof { siblings }
    }

    /// Collect the siblings of leaf `index` from the retained levels of
    /// `tree`.
    pub fn generate(tree: &MerkleTree, index: usize) -> Result<Self> {
        let leaf_count = tree.leaf_count();
        if index >= leaf_count {
            return Err(MerkleTreeError::IndexOutOfRange { index, leaf_count });
        }

        let levels = tree.levels();
        let mut siblings = Vec::with_capacity(tree.height());
        let mut position = index;
        // The root level has no sibling.
        for level in &levels[..levels.len() - 1] {
            if let Some(sibling) = level.get(sibling_index(position)) {
                siblings.push(*sibling);
            }
            position /= 2;
        }

        Ok(Proof { siblings })
    }

    /// Sibling digests, leaf-ward first.
    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Number of sibling digests.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// `true` for the proof of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Consume the proof and return its siblings.
    pub fn into_siblings(self) -> Vec<Digest> {
        self.siblings
    }

    /// The siblings as raw arrays, the shape a claim instruction carries.
    pub fn to_byte_arrays(&self) -> Vec<[u8; DIGEST_LEN]> {
        self.siblings.iter().map(|d| d.to_bytes()).collect()
    }
}

impl From<Vec<Digest>> for Proof {
    fn from(siblings: Vec<Digest>) -> Self {
        Proof { siblings }
    }
}

impl From<Vec<[u8; DIGEST_LEN]>> for Proof {
    fn from(siblings: Vec<[u8; DIGEST_LEN]>) -> Self {
        Proof {
            siblings: siblings.into_iter().map(Digest::from).collect(),
        }
    }
}

impl MerkleTree {
    /// Generate the inclusion proof for leaf `index`.
    pub fn generate_proof(&self, index: usize) -> Result<Proof> {
        Proof::generate(self, index)
    }
}
