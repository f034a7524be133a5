//! Shared shape checks for integration tests

#![allow(dead_code)]

use avl_tree::{AvlTree, Node, EMPTY_HEIGHT};

/// Walk the whole tree and assert every structural invariant.
///
/// Returns the number of nodes visited.
pub fn assert_invariants<K: Ord + std::fmt::Debug>(tree: &AvlTree<K>) -> usize {
    let (count, height) = check(tree.root(), None, None);
    assert_eq!(count, tree.size(), "size must match reachable nodes");
    assert_eq!(height, tree.height(), "tree height must be the root's cached height");

    let keys = tree.in_order();
    assert!(
        keys.windows(2).all(|pair| pair[0] < pair[1]),
        "in-order keys must be strictly ascending: {keys:?}"
    );
    count
}

/// Returns (node count, recomputed height) of the subtree.
fn check<K: Ord + std::fmt::Debug>(
    node: Option<&Node<K>>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> (usize, i32) {
    let Some(node) = node else {
        return (0, EMPTY_HEIGHT);
    };
    let key = node.key();
    if let Some(lower) = lower {
        assert!(lower < key, "{key:?} must sort after ancestor {lower:?}");
    }
    if let Some(upper) = upper {
        assert!(key < upper, "{key:?} must sort before ancestor {upper:?}");
    }

    let (left_count, left_height) = check(node.left(), lower, Some(key));
    let (right_count, right_height) = check(node.right(), Some(key), upper);
    let height = left_height.max(right_height) + 1;

    assert_eq!(node.height(), height, "stale height at {key:?}");
    assert_eq!(
        node.balance_factor(),
        left_height - right_height,
        "stale balance factor at {key:?}"
    );
    assert!(
        (-1..=1).contains(&node.balance_factor()),
        "unbalanced at {key:?}: {}",
        node.balance_factor()
    );
    (left_count + right_count + 1, height)
}

/// Key of an optional child
pub fn key_of<K: Copy>(node: Option<&Node<K>>) -> Option<K> {
    node.map(|node| *node.key())
}
