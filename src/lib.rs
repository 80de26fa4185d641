//! This crate exposes an ordered key-value Binary Search Tree (BST) whose every operation is
//! provided twice: once written with native recursion and once with explicitly managed stacks.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Keys are unique: inserting an existing key overwrites its value. Visiting the left subtree,
//! then the subtree root, then the right subtree yields the nodes in ascending key order.
//!
//! ## Strategies
//!
//! [`TreeOperations`] is the contract. [`recursive::Recursive`] and [`iterative::Iterative`]
//! implement it and, given the same calls, build identical trees. A [`Tree`] picks one through a
//! type parameter; [`strategy::Strategy`] names them for hosts that decide at run time.
//!
//! Nothing here balances itself. Sorted inserts produce a chain as tall as the tree is large;
//! [`Tree::balance`] rebuilds any tree into minimal height on demand.
//!
//! ```
//! use bst_duo::iterative::Iterative;
//! use bst_duo::{Items, Tree};
//!
//! let mut tree: Tree<char, i32, Iterative> = Tree::new();
//! for (value, key) in "5381479".chars().enumerate() {
//!     tree.insert(key, value as i32);
//! }
//!
//! let mut items = Items::new();
//! tree.inorder(&mut items);
//! assert_eq!(items.keys().collect::<String>(), "1345789");
//! drop(items);
//!
//! // 5 has two children, so it takes the key and value of the rightmost node of its left subtree.
//! tree.delete(&'5');
//! assert_eq!(tree.root().map(|n| *n.key()), Some('4'));
//! assert_eq!(tree.search(&'5'), None);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
pub mod items;
pub mod iterative;
pub mod letter_count;
pub mod node;
pub mod ops;
pub mod recursive;
pub mod strategy;
pub mod tree;

#[cfg(test)]
mod test;

pub use items::Items;
pub use node::{Link, Node};
pub use ops::TreeOperations;
pub use tree::Tree;
