//! # Height-balanced binary search tree
//!
//! An AVL tree over any totally ordered key type. Every node caches its
//! subtree height and balance factor, so the tree height is reported in O(1)
//! and every mutation restores balance with at most O(log n) rotations.
//!
//! ## Core operations
//!
//! 1. **Insert**: descend by comparison, attach a leaf, rebalance on the way up
//! 2. **Remove**: detach, splice, or swap in the in-order predecessor; rebalance every ancestor
//! 3. **Search**: `get` / `contains` in O(height)
//! 4. **Bounded distance**: every key within `d` tree edges of a target key
//!
//! ## Usage Example
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let tree: AvlTree<i32> = [50, 25, 75, 13, 37].into_iter().collect();
//! assert_eq!(tree.height(), 2);
//!
//! let near = tree.elements_within_distance(&13, 1).unwrap();
//! assert_eq!(near.into_iter().copied().collect::<Vec<_>>(), vec![13, 25]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree; // AVL tree, nodes, rotations, distance query

pub use tree::{AvlTree, Node, EMPTY_HEIGHT};

use thiserror::Error;

/// Errors reported by tree operations.
///
/// Both kinds signal a caller mistake; a failed call never modifies the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An argument was rejected before the tree was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested key is not stored in the tree.
    #[error("key not found in tree")]
    NotFound,
}

/// Result alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TreeError::NotFound.to_string(), "key not found in tree");
        assert_eq!(
            TreeError::InvalidArgument("distance must be non-negative".into()).to_string(),
            "invalid argument: distance must be non-negative"
        );
    }
}
