//! Character frequency counting on top of a [`Tree`].

use crate::ops::TreeOperations;
use crate::tree::Tree;

/// Key that every character other than an ASCII letter or a space is counted under.
pub const OTHER: char = '_';

/// The key `c` is counted under: ASCII letters fold to lowercase, a space stays a space and
/// anything else becomes [`OTHER`].
///
/// Counting is per Unicode scalar value, not per byte: a multi-byte character such as `'é'` adds
/// one to [`OTHER`].
pub fn bucket(c: char) -> char {
    if c.is_ascii_alphabetic() {
        c.to_ascii_lowercase()
    } else if c == ' ' {
        ' '
    } else {
        OTHER
    }
}

/// Counts the characters of `input` into a fresh tree keyed by [`bucket`].
///
/// A repeated character has its node deleted and reinserted with the incremented count, so it
/// ends up as a fresh leaf and the tree's shape follows the whole input, not only the order in
/// which characters first appear. The tree is not balanced; call [`Tree::balance`] if it comes out
/// lopsided.
///
/// # Examples
///
/// ```
/// use bst_duo::letter_count::letter_count;
/// use bst_duo::recursive::Recursive;
///
/// let tree = letter_count::<Recursive>("abBccc_ 123 *");
///
/// assert_eq!(tree.search(&'a'), Some(&1));
/// assert_eq!(tree.search(&'b'), Some(&2));
/// assert_eq!(tree.search(&'c'), Some(&3));
/// assert_eq!(tree.search(&' '), Some(&2));
/// assert_eq!(tree.search(&'_'), Some(&5));
/// assert_eq!(tree.len(), 5);
/// ```
pub fn letter_count<S>(input: &str) -> Tree<char, usize, S>
where
    S: TreeOperations,
{
    let mut tree = Tree::new();
    for c in input.chars() {
        let key = bucket(c);
        let count = match tree.search(&key).copied() {
            Some(count) => {
                tree.delete(&key);
                count
            }
            None => 0,
        };
        tree.insert(key, count + 1);
    }

    log::debug!(
        "counted {} characters into {} buckets",
        input.chars().count(),
        tree.len()
    );
    tree
}
