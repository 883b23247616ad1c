//! Merkle tree for token distribution claims.
//!
//! Each leaf commits to a recipient identity and two entitlements (an
//! unlocked and a locked amount). A single root is published once; every
//! recipient later proves membership with a short inclusion proof.
//!
//! The byte layout matches a fixed on-chain verifier and must not change:
//!
//! - leaf: `sha256(0x00 || sha256(identity || unlocked_le || locked_le))`
//! - internal node: `sha256(0x01 || min(a, b) || max(a, b))`
//! - an unpaired last node on a level is carried up unchanged.
//!
//! # Core types
//!
//! - [`LeafRecord`]: one recipient and its amounts.
//! - [`Digest`]: a 32-byte SHA-256 output.
//! - [`MerkleTree`]: all levels from the leaves to the root.
//! - [`Proof`]: sibling digests from a leaf up to the root.
//!
//! # Example
//!
//! ```
//! use merkle_distributor_tree::{LeafRecord, MerkleTree, verify_proof, verify_proof_at};
//!
//! let records = vec![
//!     LeafRecord::new([1; 32], 1_000, 0),
//!     LeafRecord::new([2; 32], 500, 1_500),
//!     LeafRecord::new([3; 32], 0, 2_000),
//! ];
//! let tree = MerkleTree::from_records(&records)?;
//! let root = tree.root();
//!
//! // Leaf 2 is carried forward at level 0, so its proof has one sibling.
//! let proof = tree.generate_proof(2)?;
//! assert_eq!(proof.len(), 1);
//! assert!(verify_proof(&records[2], 2, &proof, &root));
//! assert!(verify_proof_at(&records[2], 2, records.len(), &proof, &root));
//! assert!(!verify_proof(&records[1], 1, &proof, &root));
//! # Ok::<(), merkle_distributor_tree::MerkleTreeError>(())
//! ```

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub mod helper;
mod leaf;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{MerkleTreeError, Result};
pub use hash::{
    DIGEST_LEN, Digest, INTERNAL_DOMAIN_TAG, LEAF_DOMAIN_TAG, combine, leaf_hash_from_preimage,
};
pub use leaf::{IDENTITY_LEN, LEAF_PREIMAGE_LEN, LeafRecord, encode_leaf, encode_leaves};
pub use proof::Proof;
pub use tree::MerkleTree;
pub use verify::{verify_proof, verify_proof_at};
