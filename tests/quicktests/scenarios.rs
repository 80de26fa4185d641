use bst_duo::iterative::Iterative;
use bst_duo::recursive::Recursive;
use bst_duo::{Items, TreeOperations};

use crate::{balanced_height, build, inorder_keys};

fn seven_keys<S: TreeOperations>() {
    let _ = pretty_env_logger::try_init();
    let pairs: Vec<(char, i32)> = "5381479".chars().zip(0..).collect();
    let mut tree = build::<S>(&pairs);
    assert_eq!(inorder_keys(&tree), ['1', '3', '4', '5', '7', '8', '9']);

    tree.delete(&'5');

    assert_eq!(tree.root().map(|n| *n.key()), Some('4'));
    assert_eq!(tree.search(&'5'), None);
    assert_eq!(tree.search(&'4'), Some(&4));
}

#[test]
fn delete_root_with_two_children_recursive() {
    seven_keys::<Recursive>();
}

#[test]
fn delete_root_with_two_children_iterative() {
    seven_keys::<Iterative>();
}

fn ascending_chain<S: TreeOperations>() {
    let pairs: Vec<(char, i32)> = "12345".chars().zip(0..).collect();
    let mut tree = build::<S>(&pairs);
    assert_eq!(tree.height(), 5);

    tree.balance();

    // ceil(log2(5 + 1))
    assert!(tree.height() <= 3);
    assert!(balanced_height(tree.root()).is_some());
    assert_eq!(inorder_keys(&tree), ['1', '2', '3', '4', '5']);

    let mut items = Items::new();
    tree.preorder(&mut items);
    assert_eq!(items.keys().collect::<String>(), "31245");
}

#[test]
fn balance_ascending_chain_recursive() {
    ascending_chain::<Recursive>();
}

#[test]
fn balance_ascending_chain_iterative() {
    ascending_chain::<Iterative>();
}
