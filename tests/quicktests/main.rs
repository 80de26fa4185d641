#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod laws;
mod scenarios;

use bst_duo::{Items, Tree, TreeOperations};

/// Builds a tree by inserting `pairs` in order.
pub(crate) fn build<S: TreeOperations>(pairs: &[(char, i32)]) -> Tree<char, i32, S> {
    let mut tree = Tree::new();
    for (key, value) in pairs {
        tree.insert(*key, *value);
    }
    tree
}

/// The keys of the tree in ascending order.
pub(crate) fn inorder_keys<S: TreeOperations>(tree: &Tree<char, i32, S>) -> Vec<char> {
    let mut items = Items::new();
    tree.inorder(&mut items);
    items.keys().copied().collect()
}

/// Height of the subtree, or `None` if some node's subtrees differ in height by more than one.
pub(crate) fn balanced_height(node: Option<&bst_duo::Node<char, i32>>) -> Option<usize> {
    match node {
        None => Some(0),
        Some(n) => {
            let left = balanced_height(n.left())?;
            let right = balanced_height(n.right())?;
            if left.abs_diff(right) > 1 {
                None
            } else {
                Some(left.max(right) + 1)
            }
        }
    }
}
