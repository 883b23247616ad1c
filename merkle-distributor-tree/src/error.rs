//! Error types for tree construction and proof generation.

use thiserror::Error;

/// Alias for `core::result::Result<T, MerkleTreeError>`.
pub type Result<T> = core::result::Result<T, MerkleTreeError>;

/// Errors from Merkle tree operations.
///
/// All variants are precondition violations detected before any hashing
/// takes place. Proof verification never produces one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleTreeError {
    /// A recipient identity was not exactly 32 bytes.
    #[error("invalid identity length: expected {expected} bytes, got {actual}")]
    InvalidIdentityLength {
        /// Required identity length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// Tried to build a tree without any leaves.
    #[error("cannot build a merkle tree from zero leaves")]
    EmptyInput,
    /// Requested a proof for a leaf that does not exist.
    #[error("leaf index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// Requested leaf index.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// Bytes or hex text that do not form a 32-byte digest.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}
