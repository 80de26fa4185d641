//! The contract shared by every execution strategy.

use crate::items::Items;
use crate::node::Link;

/// Operations on a tree handle. A handle is the [`Link`] that owns the root; operations that
/// change the tree's shape take it by mutable reference and may replace what it holds.
///
/// Implementors must be observably identical: the same sequence of calls on the same tree must
/// produce the same shape, the same search results and the same traversal output no matter which
/// strategy runs it.
pub trait TreeOperations {
    /// Finds the value stored under `key`. Visits one node per level on the search path and never
    /// mutates or allocates.
    fn search<'a, K, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a V>
    where
        K: Ord;

    /// Stores `value` under `key`. A missing key gets a new leaf spliced into the empty slot where
    /// the search ended; an existing key has its value overwritten in place.
    fn insert<K, V>(link: &mut Link<K, V>, key: K, value: V)
    where
        K: Ord;

    /// Moves the key and value of the rightmost node of `subtree` into `key`/`value` and splices
    /// that node out, letting its left subtree take its place. The rightmost node is freed.
    ///
    /// Does nothing when `subtree` is empty.
    fn replace_by_rightmost<K, V>(key: &mut K, value: &mut V, subtree: &mut Link<K, V>);

    /// Removes the node holding `key`, if any. A node with two children takes the key and value
    /// of its in-order predecessor (see [`replace_by_rightmost`][Self::replace_by_rightmost]) and
    /// stays in place; the predecessor is freed instead.
    fn delete<K, V>(link: &mut Link<K, V>, key: &K)
    where
        K: Ord;

    /// Frees every node and leaves the handle empty, the same state as a fresh handle.
    fn dispose<K, V>(link: &mut Link<K, V>);

    /// Appends node, left subtree, right subtree.
    fn preorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>);

    /// Appends left subtree, node, right subtree. On a valid tree this is ascending key order.
    fn inorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>);

    /// Appends left subtree, right subtree, node.
    fn postorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>);
}
