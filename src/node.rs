//! The atomic element of a tree and the owning slot that holds it.

use std::fmt;

/// An owning slot for a subtree. Every [`Node`] is owned by exactly one `Link`: either the
/// tree handle or the `left`/`right` slot of its parent. `None` is the empty subtree.
pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. It always has two child slots although either may be empty.
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Construct a new childless `Node` with the given `key` and `value`.
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    /// The key this node is sorted by.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value stored alongside the key.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether both child slots are empty.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

/// Counts the nodes reachable from `link`.
pub fn len<K, V>(link: &Link<K, V>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node<K, V>> = link.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

/// How many levels are in the subtree at `link`. An empty subtree has a height of 0 and a node
/// with no children has a height of 1.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    let mut tallest = 0;
    let mut stack: Vec<(&Node<K, V>, usize)> =
        link.as_deref().map(|n| (n, 1)).into_iter().collect();
    while let Some((node, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        stack.extend(node.left().map(|n| (n, depth + 1)));
        stack.extend(node.right().map(|n| (n, depth + 1)));
    }
    tallest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(keys: &[i32]) -> Link<i32, i32> {
        let mut link = None;
        for &key in keys.iter().rev() {
            let mut node = Node::new_boxed(key, key);
            node.right = link;
            link = Some(node);
        }
        link
    }

    #[test]
    fn empty_link_has_no_nodes() {
        let link: Link<i32, i32> = None;
        assert_eq!(len(&link), 0);
        assert_eq!(height(&link), 0);
    }

    #[test]
    fn leaf_has_height_one() {
        let link = Some(Node::new_boxed('a', 1));
        assert_eq!(len(&link), 1);
        assert_eq!(height(&link), 1);
        assert!(link.as_deref().map_or(false, Node::is_leaf));
    }

    #[test]
    fn chain_height_matches_length() {
        let link = chain(&[1, 2, 3, 4, 5]);
        assert_eq!(len(&link), 5);
        assert_eq!(height(&link), 5);
    }

    #[test]
    fn height_takes_the_taller_side() {
        let mut root = Node::new_boxed(5, 5);
        root.left = Some(Node::new_boxed(3, 3));
        root.right = chain(&[7, 8, 9]);
        let link = Some(root);

        assert_eq!(len(&link), 5);
        assert_eq!(height(&link), 4);
    }
}
