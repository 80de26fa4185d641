//! Tree operations written as loops over explicit state. Descents walk a cursor over owning slots
//! (the slot a node lives in, not the node itself, so the slot can be rewritten in place) and
//! whole-tree walks keep their pending nodes on a `Vec` stack.
//!
//! Nothing here recurses, so stack usage is constant regardless of the tree's shape.
//!
//! # Examples
//!
//! ```
//! use bst_duo::iterative::Iterative;
//! use bst_duo::{Items, TreeOperations};
//!
//! let mut root = None;
//! for (value, key) in "bac".chars().enumerate() {
//!     Iterative::insert(&mut root, key, value);
//! }
//!
//! let mut items = Items::new();
//! Iterative::postorder(&root, &mut items);
//! assert_eq!(items.keys().collect::<String>(), "acb");
//! ```

use std::cmp::Ordering;

use crate::items::Items;
use crate::node::{Link, Node};
use crate::ops::TreeOperations;

/// Explicit-stack strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Iterative;

/// Whether a node on the postorder stack is being seen on the way down (its right subtree still
/// has to be walked) or on the way back up (it can be emitted).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    First,
    Second,
}

/// Walks down from `slot` to the slot holding `key`, or to the empty slot where `key` would be
/// inserted.
fn locate<'a, K, V>(mut slot: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
where
    K: Ord,
{
    loop {
        // Compare through a shared borrow first so that `slot` is only reborrowed mutably when we
        // actually move past it.
        let ordering = slot.as_deref().map(|node| key.cmp(&node.key));
        match ordering {
            Some(Ordering::Less) => {
                slot = &mut slot.as_mut().expect("Compared against this node").left;
            }
            Some(Ordering::Greater) => {
                slot = &mut slot.as_mut().expect("Compared against this node").right;
            }
            Some(Ordering::Equal) | None => return slot,
        }
    }
}

/// Pushes `link` and every node along its left spine, emitting each one as it is pushed.
fn leftmost_preorder<'a, K, V>(
    mut link: Option<&'a Node<K, V>>,
    to_visit: &mut Vec<&'a Node<K, V>>,
    items: &mut Items<'a, K, V>,
) {
    while let Some(node) = link {
        to_visit.push(node);
        items.push(node);
        link = node.left();
    }
}

/// Pushes `link` and every node along its left spine.
fn leftmost_inorder<'a, K, V>(
    mut link: Option<&'a Node<K, V>>,
    to_visit: &mut Vec<&'a Node<K, V>>,
) {
    while let Some(node) = link {
        to_visit.push(node);
        link = node.left();
    }
}

/// Pushes `link` and every node along its left spine, each marked as seen for the first time.
fn leftmost_postorder<'a, K, V>(
    mut link: Option<&'a Node<K, V>>,
    to_visit: &mut Vec<(&'a Node<K, V>, Visit)>,
) {
    while let Some(node) = link {
        to_visit.push((node, Visit::First));
        link = node.left();
    }
}

impl TreeOperations for Iterative {
    fn search<'a, K, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a V>
    where
        K: Ord,
    {
        let mut current = link.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => current = node.right(),
            }
        }
        None
    }

    fn insert<K, V>(link: &mut Link<K, V>, key: K, value: V)
    where
        K: Ord,
    {
        let slot = locate(link, &key);
        match slot {
            Some(node) => node.value = value,
            None => *slot = Some(Node::new_boxed(key, value)),
        }
    }

    fn replace_by_rightmost<K, V>(key: &mut K, value: &mut V, subtree: &mut Link<K, V>) {
        let mut slot = subtree;
        while slot.as_deref().map_or(false, |node| node.right.is_some()) {
            slot = &mut slot.as_mut().expect("Checked for a right child").right;
        }

        let Some(rightmost) = slot.take() else {
            return;
        };
        let Node {
            key: rightmost_key,
            value: rightmost_value,
            left,
            ..
        } = *rightmost;
        *key = rightmost_key;
        *value = rightmost_value;
        *slot = left;
    }

    fn delete<K, V>(link: &mut Link<K, V>, key: &K)
    where
        K: Ord,
    {
        let slot = locate(link, key);
        let Some(node) = slot else {
            return;
        };

        if node.left.is_some() && node.right.is_some() {
            log::trace!("delete: two children, promoting predecessor");
            let Node {
                key: target_key,
                value: target_value,
                left,
                ..
            } = &mut **node;
            Self::replace_by_rightmost(target_key, target_value, left);
        } else {
            log::trace!("delete: at most one child, splicing");
            let deleted = slot.take().expect("Deleted node was just observed");
            let Node { left, right, .. } = *deleted;
            *slot = left.or(right);
        }
    }

    fn dispose<K, V>(link: &mut Link<K, V>) {
        let mut to_free: Vec<Box<Node<K, V>>> = link.take().into_iter().collect();
        while let Some(mut node) = to_free.pop() {
            to_free.extend(node.left.take());
            to_free.extend(node.right.take());
        }
    }

    fn preorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>) {
        let mut to_visit = Vec::new();
        leftmost_preorder(link.as_deref(), &mut to_visit, items);

        while let Some(node) = to_visit.pop() {
            leftmost_preorder(node.right(), &mut to_visit, items);
        }
    }

    fn inorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>) {
        let mut to_visit = Vec::new();
        leftmost_inorder(link.as_deref(), &mut to_visit);

        while let Some(node) = to_visit.pop() {
            items.push(node);
            leftmost_inorder(node.right(), &mut to_visit);
        }
    }

    fn postorder<'a, K, V>(link: &'a Link<K, V>, items: &mut Items<'a, K, V>) {
        let mut to_visit = Vec::new();
        leftmost_postorder(link.as_deref(), &mut to_visit);

        while let Some((node, visit)) = to_visit.pop() {
            match visit {
                Visit::First => {
                    to_visit.push((node, Visit::Second));
                    leftmost_postorder(node.right(), &mut to_visit);
                }
                Visit::Second => items.push(node),
            }
        }
    }
}
