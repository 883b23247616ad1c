//! Digest type and SHA-256 hashing with domain separation.
//!
//! - Leaf nodes:     `sha256(0x00 || sha256(preimage))`
//! - Internal nodes: `sha256(0x01 || lo || hi)` where `(lo, hi)` is the
//!   byte-wise sorted pair of children.
//!
//! The 0x00/0x01 tags keep an internal node from being presented as a leaf
//! (and vice versa). Sorting the children makes [`combine`] commutative, so
//! a verifier never needs to know on which side a sibling sat.

use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::{MerkleTreeError, Result};

/// Byte length of every digest.
pub const DIGEST_LEN: usize = 32;
/// Domain tag prepended to the inner leaf hash.
pub const LEAF_DOMAIN_TAG: u8 = 0x00;
/// Domain tag prepended to a sorted pair of child digests.
pub const INTERNAL_DOMAIN_TAG: u8 = 0x01;

/// A 32-byte SHA-256 output.
///
/// Ordering is lexicographic over the raw bytes, which is the order
/// [`combine`] uses to normalize its inputs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    /// Copy a digest out of a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| {
            MerkleTreeError::InvalidDigest(format!(
                "expected {} bytes, got {}",
                DIGEST_LEN,
                bytes.len()
            ))
        })?;
        Ok(Digest(bytes))
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Copy out the raw bytes.
    pub fn to_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", hex::encode(self.0))
    }
}

impl FromStr for Digest {
    type Err = MerkleTreeError;

    /// Parse 64 hex characters, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(cleaned, &mut bytes)
            .map_err(|e| MerkleTreeError::InvalidDigest(format!("{}: {}", cleaned, e)))?;
        Ok(Digest(bytes))
    }
}

/// Hash a serialized leaf: `sha256(0x00 || sha256(preimage))`.
pub fn leaf_hash_from_preimage(preimage: &[u8]) -> Digest {
    let inner = Sha256::digest(preimage);
    let outer = Sha256::new()
        .chain_update([LEAF_DOMAIN_TAG])
        .chain_update(inner)
        .finalize();
    Digest(outer.into())
}

/// Combine two sibling digests into their parent.
///
/// `combine(a, b) == combine(b, a)` for all inputs.
pub fn combine(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let parent = Sha256::new()
        .chain_update([INTERNAL_DOMAIN_TAG])
        .chain_update(lo.0)
        .chain_update(hi.0)
        .finalize();
    Digest(parent.into())
}
