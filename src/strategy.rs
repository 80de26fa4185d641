//! Picking a strategy or a traversal order by name, for hosts that decide at run time instead of
//! through a type parameter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::items::Items;
use crate::node::Link;
use crate::ops::TreeOperations;

/// Error returned when a strategy name is not recognised.
#[derive(Error, Debug, PartialEq, Clone)]
#[error("Unknown strategy `{0}`, expected `recursive` or `iterative`.")]
pub struct ParseStrategyError(String);

/// Error returned when a traversal order name is not recognised.
#[derive(Error, Debug, PartialEq, Clone)]
#[error("Unknown traversal order `{0}`, expected `preorder`, `inorder` or `postorder`.")]
pub struct ParseOrderError(String);

/// The execution strategies available at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// [`Recursive`][crate::recursive::Recursive].
    #[default]
    Recursive,
    /// [`Iterative`][crate::iterative::Iterative].
    Iterative,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" | "rec" => Ok(Self::Recursive),
            "iterative" | "iter" => Ok(Self::Iterative),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recursive => f.write_str("recursive"),
            Self::Iterative => f.write_str("iterative"),
        }
    }
}

/// The three depth-first traversal orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, node, right subtree.
    #[default]
    Inorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

impl Order {
    /// Runs this traversal with strategy `S`.
    pub fn traverse<'a, S, K, V>(self, link: &'a Link<K, V>, items: &mut Items<'a, K, V>)
    where
        S: TreeOperations,
    {
        match self {
            Self::Preorder => S::preorder(link, items),
            Self::Inorder => S::inorder(link, items),
            Self::Postorder => S::postorder(link, items),
        }
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "preorder" | "pre" => Ok(Self::Preorder),
            "inorder" | "in" => Ok(Self::Inorder),
            "postorder" | "post" => Ok(Self::Postorder),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preorder => f.write_str("preorder"),
            Self::Inorder => f.write_str("inorder"),
            Self::Postorder => f.write_str("postorder"),
        }
    }
}
