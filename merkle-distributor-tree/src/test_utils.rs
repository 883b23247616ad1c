//! Shared fixtures for the crate's tests.

use crate::{LeafRecord, MerkleTree};

/// Deterministic record for leaf `i`: identity filled from `i`, amounts
/// derived from `i` so no two records share a digest.
pub(crate) fn record(i: u32) -> LeafRecord {
    let mut identity = [0u8; 32];
    identity[..4].copy_from_slice(&i.to_be_bytes());
    identity[31] = 0x5a;
    LeafRecord::new(identity, 1_000 * u64::from(i) + 1, u64::from(i) * 7)
}

/// `count` records built with [`record`].
pub(crate) fn records(count: u32) -> Vec<LeafRecord> {
    (0..count).map(record).collect()
}

/// A tree over `count` fixture records, returned with the records.
pub(crate) fn make_tree(count: u32) -> (MerkleTree, Vec<LeafRecord>) {
    let records = records(count);
    let tree = MerkleTree::from_records(&records).expect("non-empty fixture");
    (tree, records)
}

/// The three records used by the known-answer tests.
pub(crate) fn known_answer_records() -> [LeafRecord; 3] {
    [
        LeafRecord::new(core::array::from_fn(|i| i as u8), 10_000_000_000_000, 0),
        LeafRecord::new([0xaa; 32], 500, 1500),
        LeafRecord::new([0x01; 32], 1, 2),
    ]
}
