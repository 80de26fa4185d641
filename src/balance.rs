//! Rebuilds a tree into minimal height.
//!
//! The nodes are first unlinked in ascending (in-order) order into a sequence that owns them, then
//! relinked by recursively picking the midpoint of each index range as that range's subtree root.
//! The very same boxes are relinked: keys and values are never moved or copied and no node is
//! allocated or freed.
//!
//! # Examples
//!
//! ```
//! use bst_duo::Tree;
//!
//! let mut tree: Tree<char, i32> = Tree::new();
//! for (value, key) in ('a'..='e').enumerate() {
//!     tree.insert(key, value as i32);
//! }
//! // Sorted inserts leave a chain.
//! assert_eq!(tree.height(), 5);
//!
//! tree.balance();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.search(&'c'), Some(&2));
//! ```

use crate::node::{self, Link, Node};

/// Rebalances the tree at `link` so that for every node the heights of its two subtrees differ by
/// at most one. The in-order sequence of the tree is unchanged.
pub fn balance<K, V>(link: &mut Link<K, V>) {
    let before = log::log_enabled!(log::Level::Debug).then(|| node::height(link));

    let mut sorted: Vec<Link<K, V>> = unlink_inorder(link.take())
        .into_iter()
        .map(Some)
        .collect();
    *link = relink(&mut sorted);

    if let Some(before) = before {
        log::debug!(
            "balanced {} nodes, height {} -> {}",
            sorted.len(),
            before,
            node::height(link)
        );
    }
}

/// Detaches every node reachable from `link` and returns them in ascending key order, each with
/// both child slots empty.
fn unlink_inorder<K, V>(link: Link<K, V>) -> Vec<Box<Node<K, V>>> {
    let mut sorted = Vec::new();
    let mut to_visit = Vec::new();
    let mut current = link;

    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            to_visit.push(node);
        }
        let Some(mut node) = to_visit.pop() else {
            break;
        };
        current = node.right.take();
        sorted.push(node);
    }

    sorted
}

/// Builds a subtree out of a contiguous range of the sorted sequence. The node at
/// `(start + end) / 2` of the inclusive range `[start, end]` becomes the root and the halves on
/// either side become its subtrees. Each slot is taken exactly once.
fn relink<K, V>(range: &mut [Link<K, V>]) -> Link<K, V> {
    if range.is_empty() {
        return None;
    }
    let mid = (range.len() - 1) / 2;
    let (left, rest) = range.split_at_mut(mid);
    let (root, right) = rest.split_first_mut().expect("Range is not empty");

    let mut root = root.take().expect("Every slot is taken once");
    root.left = relink(left);
    root.right = relink(right);
    Some(root)
}
