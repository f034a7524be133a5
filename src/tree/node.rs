//! Tree node
//!
//! Node = key + owned children + cached stats
//!   height: edges on the longest downward path (leaf = 0, empty = -1)
//!   balance_factor: height(left) - height(right)

/// Owned link to a child subtree
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// Height reported for an absent subtree
pub const EMPTY_HEIGHT: i32 = -1;

/// Tree node, exclusively owned by its parent (or by the tree for the root)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
    pub(crate) balance_factor: i32,
}

impl<K> Node<K> {
    /// Create a detached leaf
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 0,
            balance_factor: 0,
        })
    }

    /// Stored key
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Left subtree, if any
    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Right subtree, if any
    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted here
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cached `height(left) - height(right)`
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        self.balance_factor
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recompute height and balance factor from the children.
    ///
    /// Children must already carry up-to-date stats.
    pub(crate) fn update_stats(&mut self) {
        let left = height_of(self.left.as_deref());
        let right = height_of(self.right.as_deref());
        self.height = left.max(right) + 1;
        self.balance_factor = left - right;
    }
}

/// Height of an optional subtree
#[inline]
pub(crate) fn height_of<K>(node: Option<&Node<K>>) -> i32 {
    node.map_or(EMPTY_HEIGHT, Node::height)
}
