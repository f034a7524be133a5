//! Bounded-distance query
//!
//! Distance = number of tree edges on the unique path between two nodes.
//! From the target, the path climbs k ancestors and then descends into the
//! sibling subtree that was not on the way down.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::node::Node;

/// Walk toward `target`, collecting keys within `max` edges of it.
///
/// Returns the distance from `target` to `node`, or `None` when `target`
/// is not in this subtree. Keys are only added after the target is found,
/// so on `None` nothing has been inserted into `found`.
pub(crate) fn collect_on_path<'a, K, Q>(
    node: Option<&'a Node<K>>,
    target: &Q,
    max: usize,
    found: &mut BTreeSet<&'a K>,
) -> Option<usize>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let node = node?;
    let (distance, untraveled) = match target.cmp(<K as Borrow<Q>>::borrow(&node.key)) {
        Ordering::Equal => {
            collect_below(Some(node), max, 0, found);
            return Some(0);
        }
        Ordering::Less => (
            collect_on_path(node.left(), target, max, found)? + 1,
            node.right(),
        ),
        Ordering::Greater => (
            collect_on_path(node.right(), target, max, found)? + 1,
            node.left(),
        ),
    };

    if distance <= max {
        found.insert(&node.key);
    }
    if distance < max {
        collect_below(untraveled, max, distance + 1, found);
    }
    Some(distance)
}

/// Collect `node` and every descendant whose distance stays within `max`.
///
/// `distance` is the distance of `node` itself.
fn collect_below<'a, K: Ord>(
    node: Option<&'a Node<K>>,
    max: usize,
    distance: usize,
    found: &mut BTreeSet<&'a K>,
) {
    let Some(node) = node else {
        return;
    };
    if distance > max {
        return;
    }
    found.insert(&node.key);
    if distance < max {
        collect_below(node.left(), max, distance + 1, found);
        collect_below(node.right(), max, distance + 1, found);
    }
}
