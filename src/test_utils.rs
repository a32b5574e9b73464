use std::fmt::Debug;

use proptest::prelude::*;

use crate::{node::Node, BalancedMap};

/// Generate short keys from a four-letter alphabet, so that generated keys
/// frequently collide and share prefixes.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-d]{1,4}"
}

/// Generate prefixes over the same alphabet as [`arbitrary_key()`], including
/// the empty prefix.
pub(crate) fn arbitrary_prefix() -> impl Strategy<Value = String> {
    "[a-d]{0,3}"
}

/// Assert the BST and AVL properties of every node in `t`, and that the
/// entry count matches the number of nodes.
pub(crate) fn validate_tree_structure<K, V>(t: &BalancedMap<K, V>)
where
    K: Ord + Debug,
    V: Debug,
{
    let n = validate_subtree(t.root());

    assert_eq!(n, t.len());
    assert_eq!(t.is_empty(), t.len() == 0);
}

/// Assert the BST and AVL properties of the subtree rooted at `root`,
/// returning the number of nodes in it.
pub(crate) fn validate_subtree<K, V>(root: Option<&Node<K, V>>) -> usize
where
    K: Ord + Debug,
    V: Debug,
{
    let root = match root {
        Some(v) => v,
        None => return 0,
    };

    let mut count = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![(root, None::<&K>, None::<&K>)];
    while let Some((n, lower, upper)) = stack.pop() {
        count += 1;

        // Invariant 1: every key in the left subtree is strictly less than
        // this node's key, and every key in the right subtree strictly
        // greater (which also makes keys unique).
        assert!(lower.map(|v| v < n.key()).unwrap_or(true), "node={n:?}");
        assert!(upper.map(|v| v > n.key()).unwrap_or(true), "node={n:?}");

        // Prepare to visit the children, narrowing the permitted key bounds.
        stack.extend(n.left().map(|v| (v, lower, Some(n.key()))));
        stack.extend(n.right().map(|v| (v, Some(n.key()), upper)));

        // Invariant 2: the height of this node is always +1 of the maximum
        // child height, with an absent child at height 0.
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with key {:?} to have height {}, has {}",
            n.key(),
            want_height,
            n.height(),
        );

        // Invariant 3: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(balance <= 1, "balance={balance}, node={n:?}");
    }

    count
}
