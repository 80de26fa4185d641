//! Tree operations written with native recursion. Every operation descends by calling itself on a
//! child slot, so the call stack holds the path from the root.
//!
//! Stack depth is proportional to the tree's height. A degenerate tree (keys inserted in sorted
//! order) of a few hundred thousand nodes can exhaust the stack; use
//! [`Iterative`][crate::iterative::Iterative] or [`balance`][crate::balance::balance] for those.
//!
//! # Examples
//!
//! ```
//! use bst_duo::recursive::Recursive;
//! use bst_duo::TreeOperations;
//!
//! let mut root = None;
//! Recursive::insert(&mut root, 'b', 2);
//! Recursive::insert(&mut root, 'a', 1);
//!
//! assert_eq!(Recursive::search(&root, &'a'), Some(&1));
//!
//! Recursive::delete(&mut root, &'a');
//! assert_eq!(Recursive::search(&root, &'a'), None);
//! ```

use std::cmp::Ordering;

use crate::items::Items;
use crate::node::{Link, Node};
use crate::ops::TreeOperations;

/// Call-stack recursion strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Recursive;

impl TreeOperations for Recursive {
    fn search<'a, K, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a V>
    where
        K: Ord,
    {
        let node = link.as_deref()?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::search(&node.left, key),
            Ordering::Equal => Some(&node.value),
            Ordering::Greater => Self::search(&node.right, key),
        }
    }

    fn insert<K, V>(link: &mut Link<K, V>, key: K, value: V)
    where
        K: Ord,
    {
        match link {
            None => *link = Some(Node::new_boxed(key, value)),
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert(&mut node.left, key, value),
                Ordering::Equal => node.value = value,
                Ordering::Greater => Self::insert(&mut node.right, key, value),
            },
        }
    }

    fn replace_by_rightmost<K, V>(key: &mut K, value: &mut V, subtree: &mut Link<K, V>) {
        let Some(node) = subtree else {
            return;
        };
        if node.right.is_some() {
            return Self::replace_by_rightmost(key, value, &mut node.right);
        }

        let rightmost = subtree.take().expect("Rightmost node was just observed");
        let Node {
            key: rightmost_key,
            value: rightmost_value,
            left,
            ..
        } = *rightmost;
        *key = rightmost_key;
        *value = rightmost_value;
        *subtree = left;
    }

    fn delete<K, V>(link: &mut Link<K, V>, key: &K)
    where
        K: Ord,
    {
        let Some(node) = link else {
            return;
        };
        match key.cmp(&node.key) {
            Ordering::Less => Self::delete(&mut node.left, key),
            Ordering::Greater => Self::delete(&mut node.right, key),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                log::trace!("delete: two children, promoting predecessor");
                let Node {
                    key: target_key,
                    value: target_value,
                    left,
                    ..
                } = &mut **node;
                Self::replace_by_rightmost(target_key, target_value, left);
            }
            Ordering::Equal => {
                let deleted = link.take().expect("Deleted node was just observed");
                log::trace!("delete: at most one child, splicing");
                let Node { left, right, .. } = *deleted;
                *link = left.or(right);
            }
        }
    }

    fn dispose<K, V>(link: &mut Link<K, V>) {
        if let Some(mut node) = link.take() {
            Self::dispose(&mut node.right);
            Self::dispose(&mut node.left);
        }
    }

    fn preorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>) {
        if let Some(node) = link {
            items.push(node);
            Self::preorder(&node.left, items);
            Self::preorder(&node.right, items);
        }
    }

    fn inorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>) {
        if let Some(node) = link {
            Self::inorder(&node.left, items);
            items.push(node);
            Self::inorder(&node.right, items);
        }
    }

    fn postorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>) {
        if let Some(node) = link {
            Self::postorder(&node.left, items);
            Self::postorder(&node.right, items);
            items.push(node);
        }
    }
}
