use std::collections::{HashMap, HashSet};

use bst_duo::iterative::Iterative;
use bst_duo::recursive::Recursive;
use bst_duo::{Items, Tree, TreeOperations};

use crate::{balanced_height, build, inorder_keys};

fn strictly_ascending(keys: &[char]) -> bool {
    keys.windows(2).all(|w| w[0] < w[1])
}

fn ascending_after_deletes<S: TreeOperations>(pairs: &[(char, i32)], deletes: &[char]) -> bool {
    let mut tree = build::<S>(pairs);
    for key in deletes {
        tree.delete(key);
    }
    strictly_ascending(&inorder_keys(&tree))
}

#[quickcheck]
fn inorder_is_strictly_ascending(pairs: Vec<(char, i32)>, deletes: Vec<char>) -> bool {
    ascending_after_deletes::<Recursive>(&pairs, &deletes)
        && ascending_after_deletes::<Iterative>(&pairs, &deletes)
}

fn round_trip<S: TreeOperations>(pairs: &[(char, i32)], deletes: &[char]) -> bool {
    let mut tree = build::<S>(pairs);
    for key in deletes {
        tree.delete(key);
    }

    let mut latest = HashMap::new();
    for (key, value) in pairs {
        latest.insert(*key, *value);
    }
    let deleted: HashSet<_> = deletes.iter().collect();

    latest.iter().all(|(key, value)| {
        if deleted.contains(key) {
            tree.search(key).is_none()
        } else {
            tree.search(key) == Some(value)
        }
    })
}

#[quickcheck]
fn search_finds_latest_value(pairs: Vec<(char, i32)>, deletes: Vec<char>) -> bool {
    round_trip::<Recursive>(&pairs, &deletes) && round_trip::<Iterative>(&pairs, &deletes)
}

fn preorder_keys<S: TreeOperations>(tree: &Tree<char, i32, S>) -> Vec<char> {
    let mut items = Items::new();
    tree.preorder(&mut items);
    items.keys().copied().collect()
}

fn absent_delete_is_noop<S: TreeOperations>(pairs: &[(char, i32)], absent: char) -> bool {
    let mut tree = build::<S>(pairs);
    let before = preorder_keys(&tree);

    tree.delete(&absent);

    preorder_keys(&tree) == before
}

#[quickcheck]
fn deleting_absent_key_changes_nothing(pairs: Vec<(char, i32)>, absent: char) -> bool {
    if pairs.iter().any(|(key, _)| *key == absent) {
        return true;
    }
    absent_delete_is_noop::<Recursive>(&pairs, absent)
        && absent_delete_is_noop::<Iterative>(&pairs, absent)
}

fn overwrite_in_place<S: TreeOperations>(pairs: &[(char, i32)], key: char, value: i32) -> bool {
    let mut tree = build::<S>(pairs);
    let len = tree.len();
    let shape = preorder_keys(&tree);

    tree.insert(key, value);

    tree.len() == len && preorder_keys(&tree) == shape && tree.search(&key) == Some(&value)
}

#[quickcheck]
fn overwrite_keeps_node_count(pairs: Vec<(char, i32)>, value: i32) -> bool {
    let Some((key, _)) = pairs.first().copied() else {
        return true;
    };
    overwrite_in_place::<Recursive>(&pairs, key, value)
        && overwrite_in_place::<Iterative>(&pairs, key, value)
}

#[quickcheck]
fn dispose_forgets_everything(pairs: Vec<(char, i32)>) -> bool {
    let mut recursive = build::<Recursive>(&pairs);
    let mut iterative = build::<Iterative>(&pairs);
    recursive.dispose();
    iterative.dispose();

    let forgotten = pairs
        .iter()
        .all(|(key, _)| recursive.search(key).is_none() && iterative.search(key).is_none());

    recursive.insert('x', 1);
    forgotten && !recursive.is_empty() && recursive.len() == 1 && iterative.is_empty()
}

#[quickcheck]
fn balance_law(pairs: Vec<(char, i32)>) -> bool {
    let mut tree: Tree<char, i32, Recursive> = build(&pairs);
    let before: Vec<(char, i32)> = {
        let mut items = Items::new();
        tree.inorder(&mut items);
        items.iter().map(|n| (*n.key(), *n.value())).collect()
    };

    tree.balance();

    let mut items = Items::new();
    tree.inorder(&mut items);
    let after: Vec<(char, i32)> = items.iter().map(|n| (*n.key(), *n.value())).collect();

    let min_height = (usize::BITS - tree.len().leading_zeros()) as usize;
    after == before && balanced_height(tree.root()) == Some(min_height)
}
