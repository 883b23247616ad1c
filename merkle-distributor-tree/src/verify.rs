//! Proof verification.
//!
//! Pure functions, no tree required: the caller supplies the leaf data, a
//! proof and a root obtained elsewhere. Verification never errors; any
//! malformed or foreign proof simply fails to reproduce the root and the
//! result is `false`.

use log::trace;

use crate::{
    LeafRecord, MerkleTree,
    hash::{Digest, combine},
    helper::{next_level_len, proof_len, sibling_index},
    proof::Proof,
};

impl Proof {
    /// Fold the siblings over `leaf_hash` and return the resulting root.
    pub fn calculate_root(&self, leaf_hash: Digest) -> Digest {
        self.siblings()
            .iter()
            .enumerate()
            .fold(leaf_hash, |node, (step, sibling)| {
                let parent = combine(&node, sibling);
                trace!("step {}: node {} sibling {} -> {}", step, node, sibling, parent);
                parent
            })
    }

    /// Check an already computed leaf digest against `expected_root`.
    ///
    /// This is the same routine an on-chain verifier runs after hashing the
    /// claimant's leaf itself.
    pub fn verify_leaf_hash(&self, leaf_hash: Digest, expected_root: &Digest) -> bool {
        let computed = self.calculate_root(leaf_hash);
        trace!("computed root {}, expected {}", computed, expected_root);
        &computed == expected_root
    }

    /// Check that `record` is committed under `expected_root`.
    pub fn verify(&self, record: &LeafRecord, expected_root: &Digest) -> bool {
        self.verify_leaf_hash(record.leaf_hash(), expected_root)
    }
}

impl MerkleTree {
    /// Check a proof for `record` against this tree's root.
    pub fn verify_proof(&self, record: &LeafRecord, proof: &Proof) -> bool {
        proof.verify(record, &self.root())
    }
}

/// Verify that `record` is a member of the tree with root `expected_root`.
///
/// Because [`combine`] is commutative the index does not take part in the
/// recomputation; it is only recorded in the trace log. Use
/// [`verify_proof_at`] to also bind the proof to a position.
pub fn verify_proof(
    record: &LeafRecord,
    index: usize,
    proof: &Proof,
    expected_root: &Digest,
) -> bool {
    trace!("verifying proof of {} siblings for leaf {}", proof.len(), index);
    proof.verify(record, expected_root)
}

/// Verify `record` at `index` in a tree of `leaf_count` leaves.
///
/// Replays the builder's traversal level by level: a sibling is consumed
/// only where the path node had a partner, exactly as the proof generator
/// emitted it. Returns `false` for an out-of-range index or for a proof
/// whose length does not match the tree shape, in addition to a root
/// mismatch.
pub fn verify_proof_at(
    record: &LeafRecord,
    index: usize,
    leaf_count: usize,
    proof: &Proof,
    expected_root: &Digest,
) -> bool {
    if index >= leaf_count {
        trace!("leaf index {} out of range for {} leaves", index, leaf_count);
        return false;
    }
    if proof.len() != proof_len(leaf_count, index) {
        trace!(
            "proof has {} siblings, tree shape requires {}",
            proof.len(),
            proof_len(leaf_count, index)
        );
        return false;
    }

    let mut node = record.leaf_hash();
    let mut siblings = proof.siblings().iter();
    let mut position = index;
    let mut len = leaf_count;
    while len > 1 {
        if sibling_index(position) < len {
            match siblings.next() {
                Some(sibling) => node = combine(&node, sibling),
                None => return false,
            }
        }
        position /= 2;
        len = next_level_len(len);
    }

    &node == expected_root
}
