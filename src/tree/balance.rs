//! Rotations and the rebalancing policy
//!
//! Each function takes an owned subtree and returns the owned subtree that
//! replaces it, so no parent links are ever needed.

use tracing::trace;

use super::node::Node;

/// Rotate left: the right child becomes the subtree root.
///
/// ```text
///     a                b
///    / \              / \
///   x   b     =>     a   z
///      / \          / \
///     y   z        x   y
/// ```
pub(crate) fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_stats();
    pivot.left = Some(node);
    pivot.update_stats();
    trace!(height = pivot.height, "rotated left");
    pivot
}

/// Rotate right: mirror image of [`rotate_left`].
pub(crate) fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_stats();
    pivot.right = Some(node);
    pivot.update_stats();
    trace!(height = pivot.height, "rotated right");
    pivot
}

/// Refresh the node's stats and restore the AVL condition at this node.
///
/// Children must already be balanced with fresh stats; afterwards the
/// returned subtree root has `balance_factor` in `-1..=1`.
pub(crate) fn rebalance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    node.update_stats();
    match node.balance_factor {
        2 => {
            // left-right: straighten the left child first
            if node.left.as_ref().is_some_and(|left| left.balance_factor == -1) {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        }
        -2 => {
            // right-left
            if node.right.as_ref().is_some_and(|right| right.balance_factor == 1) {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        }
        _ => node,
    }
}
