//! Position arithmetic shared by the builder, the proof generator and the
//! positional verifier.

/// Index of the node paired with `index` on the same level.
///
/// The result may be past the end of the level; that node was carried
/// forward unpaired.
pub fn sibling_index(index: usize) -> usize {
    index ^ 1
}

/// Length of the level built from a level of `len` nodes.
pub fn next_level_len(len: usize) -> usize {
    len.div_ceil(2)
}

/// Number of levels above the leaves for a tree of `leaf_count` leaves.
///
/// Returns 0 for both an empty and a single-leaf tree.
pub fn tree_height(leaf_count: usize) -> usize {
    let mut len = leaf_count;
    let mut height = 0;
    while len > 1 {
        len = next_level_len(len);
        height += 1;
    }
    height
}

/// Number of sibling digests a proof for `index` contains.
///
/// This is `tree_height(leaf_count)` minus one for every level on which
/// the path node was the unpaired last element.
pub fn proof_len(leaf_count: usize, mut index: usize) -> usize {
    let mut len = leaf_count;
    let mut siblings = 0;
    while len > 1 {
        if sibling_index(index) < len {
            siblings += 1;
        }
        index /= 2;
        len = next_level_len(len);
    }
    siblings
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_sibling_index() {
        assert_eq!(sibling_index(0), 1);
        assert_eq!(sibling_index(1), 0);
        assert_eq!(sibling_index(6), 7);
        assert_eq!(sibling_index(7), 6);
    }

    #[test]
    fn test_next_level_len() {
        assert_eq!(next_level_len(1), 1);
        assert_eq!(next_level_len(2), 1);
        assert_eq!(next_level_len(3), 2);
        assert_eq!(next_level_len(5), 3);
        assert_eq!(next_level_len(8), 4);
    }

    #[test]
    fn test_tree_height() {
        assert_eq!(tree_height(0), 0);
        assert_eq!(tree_height(1), 0);
        assert_eq!(tree_height(2), 1);
        assert_eq!(tree_height(3), 2);
        assert_eq!(tree_height(4), 2);
        assert_eq!(tree_height(5), 3);
        assert_eq!(tree_height(8), 3);
        assert_eq!(tree_height(9), 4);
    }

    #[test]
    fn test_proof_len_with_carry_forward() {
        // 3 leaves: index 2 is carried forward at level 0.
        assert_eq!(proof_len(3, 0), 2);
        assert_eq!(proof_len(3, 1), 2);
        assert_eq!(proof_len(3, 2), 1);

        // 5 leaves: index 4 is carried at levels 0 and 1.
        assert_eq!(proof_len(5, 4), 1);
        assert_eq!(proof_len(5, 0), 3);

        assert_eq!(proof_len(1, 0), 0);
        assert_eq!(proof_len(8, 5), 3);
    }
}
