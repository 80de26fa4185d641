//! A tree handle bound to one execution strategy.
//!
//! # Examples
//!
//! ```
//! use bst_duo::iterative::Iterative;
//! use bst_duo::{Items, Tree};
//!
//! let mut tree: Tree<char, i32, Iterative> = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&'a'), None);
//!
//! tree.insert('a', 1);
//! assert_eq!(tree.search(&'a'), Some(&1));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert('a', 2);
//! assert_eq!(tree.search(&'a'), Some(&2));
//! assert_eq!(tree.len(), 1);
//!
//! tree.delete(&'a');
//! assert_eq!(tree.search(&'a'), None);
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::balance;
use crate::items::Items;
use crate::iterative::Iterative;
use crate::node::{self, Link, Node};
use crate::ops::TreeOperations;
use crate::recursive::Recursive;
use crate::strategy::Order;

/// An ordered map from keys to values stored as an unbalanced Binary Search Tree. Every operation
/// runs through the strategy `S`; [`Recursive`] when left unspecified.
///
/// An empty `Tree` is both what [`Tree::new`] returns and what [`Tree::dispose`] leaves behind;
/// the two cannot be told apart.
pub struct Tree<K, V, S = Recursive> {
    root: Link<K, V>,
    strategy: PhantomData<S>,
}

impl<K, V, S> Default for Tree<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Drop for Tree<K, V, S> {
    fn drop(&mut self) {
        // Always unwind with the explicit stack: a chain built by sorted inserts would overflow
        // the call stack if each node dropped its children recursively.
        Iterative::dispose(&mut self.root);
    }
}

impl<K, V, S> fmt::Debug for Tree<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<K, V, S> Tree<K, V, S> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            strategy: PhantomData,
        }
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        node::len(&self.root)
    }

    /// Number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Rebuilds the tree into minimal height. See [`balance::balance`].
    pub fn balance(&mut self) {
        balance::balance(&mut self.root);
    }
}

impl<K, V, S> Tree<K, V, S>
where
    S: TreeOperations,
{
    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        S::search(&self.root, key)
    }

    /// Whether a node with `key` exists.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value.
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        S::insert(&mut self.root, key, value);
    }

    /// Deletes the node containing the given key from the tree. If the tree does not contain a node
    /// with the key, nothing happens.
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        S::delete(&mut self.root, key);
    }

    /// Frees every node, leaving the tree as if it were just created.
    pub fn dispose(&mut self) {
        S::dispose(&mut self.root);
        log::debug!("disposed tree");
    }

    /// Appends every node to `items` in preorder.
    pub fn preorder<'a>(&'a self, items: &mut Items<'a, K, V>) {
        S::preorder(&self.root, items);
    }

    /// Appends every node to `items` in ascending key order.
    pub fn inorder<'a>(&'a self, items: &mut Items<'a, K, V>) {
        S::inorder(&self.root, items);
    }

    /// Appends every node to `items` in postorder.
    pub fn postorder<'a>(&'a self, items: &mut Items<'a, K, V>) {
        S::postorder(&self.root, items);
    }

    /// Appends every node to `items` in the given order.
    pub fn traverse<'a>(&'a self, order: Order, items: &mut Items<'a, K, V>) {
        order.traverse::<S, K, V>(&self.root, items);
    }
}
