//! Height-balanced binary search tree
//!
//! Every recursive mutation takes ownership of a subtree and hands back the
//! subtree that replaces it (possibly rotated), so nodes never need parent
//! pointers and every ancestor on the path is rebalanced on the way back up.

mod balance;
mod distance;
mod node;

pub use node::{Node, EMPTY_HEIGHT};

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::mem;

use tracing::debug;

use crate::{Result, TreeError};
use balance::rebalance;
use node::{height_of, Link};

/// AVL tree of unique keys
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct AvlTree<K> {
    /// Root node, `None` when empty
    root: Link<K>,

    /// Number of keys reachable from `root`
    size: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }
}

impl<K: Ord> AvlTree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from keys that may be missing.
    ///
    /// Every element is checked before anything is inserted; a `None`
    /// anywhere yields `InvalidArgument` and no tree.
    pub fn try_from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<K>>,
    {
        let keys = keys
            .into_iter()
            .enumerate()
            .map(|(position, key)| {
                key.ok_or_else(|| {
                    TreeError::InvalidArgument(format!("key at position {position} is missing"))
                })
            })
            .collect::<Result<Vec<K>>>()?;

        debug!(count = keys.len(), "building tree from keys");
        Ok(keys.into_iter().collect())
    }

    /// Number of keys stored
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Height of the root, [`EMPTY_HEIGHT`] when empty. O(1).
    pub fn height(&self) -> i32 {
        height_of(self.root.as_deref())
    }

    /// Root node, for inspecting the shape
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Drop every node
    pub fn clear(&mut self) {
        debug!(size = self.size, "clearing tree");
        self.root = None;
        self.size = 0;
    }

    /// Insert `key`.
    ///
    /// Returns `false` and leaves the tree untouched when an equal key is
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (root, inserted) = Self::insert_into(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Remove and return the stored key equal to `key`.
    ///
    /// A node with two children takes over its in-order predecessor's key,
    /// and the predecessor's node is unlinked instead.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // A miss rebalances only nodes that are already balanced, which
        // leaves the shape exactly as it was.
        let (root, removed) = Self::remove_from(self.root.take(), key);
        self.root = root;
        match removed {
            Some(removed) => {
                self.size -= 1;
                Ok(removed)
            }
            None => {
                debug!("remove: key not present");
                Err(TreeError::NotFound)
            }
        }
    }

    /// Stored key equal to `key`
    pub fn get<Q>(&self, key: &Q) -> Result<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(Node::key).ok_or(TreeError::NotFound)
    }

    /// Check membership; never fails
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Every key whose tree-edge distance to `key` is at most `max_distance`.
    ///
    /// The target itself is always included (distance 0).
    pub fn elements_within_distance<Q>(&self, key: &Q, max_distance: i64) -> Result<BTreeSet<&K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if max_distance < 0 {
            return Err(TreeError::InvalidArgument(format!(
                "distance must be non-negative, got {max_distance}"
            )));
        }
        // no tree is tall enough to tell a saturated bound apart
        let max = usize::try_from(max_distance).unwrap_or(usize::MAX);

        let mut found = BTreeSet::new();
        distance::collect_on_path(self.root.as_deref(), key, max, &mut found)
            .ok_or(TreeError::NotFound)?;
        Ok(found)
    }

    /// Keys in ascending order
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            if let Some(node) = stack.pop() {
                keys.push(&node.key);
                current = node.right();
            }
        }
        keys
    }

    fn find<Q>(&self, key: &Q) -> Option<&Node<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref()?;
        loop {
            current = match key.cmp(<K as Borrow<Q>>::borrow(&current.key)) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current.left()?,
                Ordering::Greater => current.right()?,
            };
        }
    }

    fn insert_into(node: Link<K>, key: K) -> (Box<Node<K>>, bool) {
        let Some(mut node) = node else {
            return (Node::leaf(key), true);
        };
        let inserted = match key.cmp(&node.key) {
            Ordering::Equal => return (node, false),
            Ordering::Less => {
                let (left, inserted) = Self::insert_into(node.left.take(), key);
                node.left = Some(left);
                inserted
            }
            Ordering::Greater => {
                let (right, inserted) = Self::insert_into(node.right.take(), key);
                node.right = Some(right);
                inserted
            }
        };
        (rebalance(node), inserted)
    }

    fn remove_from<Q>(node: Link<K>, key: &Q) -> (Link<K>, Option<K>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut node) = node else {
            return (None, None);
        };
        let removed = match key.cmp(<K as Borrow<Q>>::borrow(&node.key)) {
            Ordering::Less => {
                let (left, removed) = Self::remove_from(node.left.take(), key);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_from(node.right.take(), key);
                node.right = right;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return (None, Some(node.key)),
                (Some(child), None) | (None, Some(child)) => return (Some(child), Some(node.key)),
                (Some(left), right) => {
                    let (left, predecessor) = Self::take_max(left);
                    node.left = left;
                    node.right = right;
                    Some(mem::replace(&mut node.key, predecessor))
                }
            },
        };
        (Some(rebalance(node)), removed)
    }

    /// Unlink the rightmost node of `node`'s subtree, promoting its left
    /// subtree into its slot. Returns the rebalanced remainder and the key.
    fn take_max(mut node: Box<Node<K>>) -> (Link<K>, K) {
        match node.right.take() {
            None => (node.left.take(), node.key),
            Some(right) => {
                let (right, max) = Self::take_max(right);
                node.right = right;
                (Some(rebalance(node)), max)
            }
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
