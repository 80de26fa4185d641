//! The collector that traversals append visited nodes into.

use std::ops::Index;
use std::slice;

use crate::node::Node;

/// An ordered, growable sequence of borrowed nodes. `Items` never owns the nodes it holds; they
/// stay owned by their tree, and the borrow keeps that tree from being mutated or disposed while
/// the collector is alive.
///
/// # Examples
///
/// ```
/// use bst_duo::{Items, Tree};
///
/// let mut tree: Tree<char, i32> = Tree::new();
/// tree.insert('b', 2);
/// tree.insert('a', 1);
///
/// let mut items = Items::new();
/// tree.inorder(&mut items);
///
/// assert_eq!(items.len(), 2);
/// assert_eq!(items.keys().copied().collect::<Vec<_>>(), ['a', 'b']);
/// ```
pub struct Items<'a, K, V> {
    nodes: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Default for Items<'a, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> Items<'a, K, V> {
    /// An empty collector.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// An empty collector with room for `capacity` nodes before it has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a node, growing the backing storage if needed.
    pub fn push(&mut self, node: &'a Node<K, V>) {
        self.nodes.push(node);
    }

    /// Number of nodes appended so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// How many nodes fit before the backing storage grows.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// The node at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&'a Node<K, V>> {
        self.nodes.get(index).copied()
    }

    /// Forgets every collected node, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates over the nodes in the order they were appended.
    pub fn iter(&self) -> Iter<'a, '_, K, V> {
        Iter {
            inner: self.nodes.iter(),
        }
    }

    /// Iterates over the keys of the collected nodes.
    pub fn keys(&self) -> impl Iterator<Item = &'a K> + '_ {
        self.iter().map(Node::key)
    }

    /// Iterates over the values of the collected nodes.
    pub fn values(&self) -> impl Iterator<Item = &'a V> + '_ {
        self.iter().map(Node::value)
    }
}

impl<'a, K, V> Index<usize> for Items<'a, K, V> {
    type Output = Node<K, V>;

    fn index(&self, index: usize) -> &Self::Output {
        self.nodes[index]
    }
}

/// Iterator over the nodes in an [`Items`].
pub struct Iter<'a, 'i, K, V> {
    inner: slice::Iter<'i, &'a Node<K, V>>,
}

impl<'a, 'i, K, V> Iterator for Iter<'a, 'i, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, 'i, K, V> IntoIterator for &'i Items<'a, K, V> {
    type Item = &'a Node<K, V>;
    type IntoIter = Iter<'a, 'i, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for Items<'a, K, V> {
    type Item = &'a Node<K, V>;
    type IntoIter = std::vec::IntoIter<&'a Node<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
