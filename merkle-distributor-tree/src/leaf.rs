//! Leaf records and their fixed-width encoding.
//!
//! A leaf serializes to exactly 48 bytes with no delimiters:
//!
//! `identity (32) || unlocked (u64 LE) || locked (u64 LE)`

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    MerkleTreeError, Result,
    hash::{Digest, leaf_hash_from_preimage},
};

/// Byte length of a recipient identity.
pub const IDENTITY_LEN: usize = 32;
/// Byte length of a serialized leaf.
pub const LEAF_PREIMAGE_LEN: usize = IDENTITY_LEN + 8 + 8;

/// One distribution recipient: an identity and its two entitlements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeafRecord {
    identity: [u8; IDENTITY_LEN],
    unlocked: u64,
    locked: u64,
}

impl LeafRecord {
    /// Create a record from an identity of the correct width.
    pub fn new(identity: [u8; IDENTITY_LEN], unlocked: u64, locked: u64) -> Self {
        LeafRecord {
            identity,
            unlocked,
            locked,
        }
    }

    /// Create a record from an identity slice, which must be 32 bytes.
    pub fn try_new(identity: &[u8], unlocked: u64, locked: u64) -> Result<Self> {
        let identity: [u8; IDENTITY_LEN] = identity.try_into().map_err(|_| {
            MerkleTreeError::InvalidIdentityLength {
                expected: IDENTITY_LEN,
                actual: identity.len(),
            }
        })?;
        Ok(Self::new(identity, unlocked, locked))
    }

    /// The recipient identity.
    pub fn identity(&self) -> &[u8; IDENTITY_LEN] {
        &self.identity
    }

    /// Amount claimable immediately.
    pub fn unlocked(&self) -> u64 {
        self.unlocked
    }

    /// Amount subject to a lockup.
    pub fn locked(&self) -> u64 {
        self.locked
    }

    /// The exact bytes that are hashed for this leaf.
    pub fn preimage(&self) -> [u8; LEAF_PREIMAGE_LEN] {
        let mut buf = [0u8; LEAF_PREIMAGE_LEN];
        buf[..IDENTITY_LEN].copy_from_slice(&self.identity);
        buf[IDENTITY_LEN..IDENTITY_LEN + 8].copy_from_slice(&self.unlocked.to_le_bytes());
        buf[IDENTITY_LEN + 8..].copy_from_slice(&self.locked.to_le_bytes());
        buf
    }

    /// Domain-separated leaf digest: `sha256(0x00 || sha256(preimage))`.
    pub fn leaf_hash(&self) -> Digest {
        leaf_hash_from_preimage(&self.preimage())
    }
}

/// Encode a single leaf straight from its parts.
pub fn encode_leaf(identity: &[u8], unlocked: u64, locked: u64) -> Result<Digest> {
    LeafRecord::try_new(identity, unlocked, locked).map(|record| record.leaf_hash())
}

/// Encode records in order; the output index is the leaf index.
pub fn encode_leaves(records: &[LeafRecord]) -> Vec<Digest> {
    records.iter().map(LeafRecord::leaf_hash).collect()
}
