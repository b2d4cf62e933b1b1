//! The multiway tree module.
//! This module implements unbalanced trees of arbitrary arity: every node holds one value
//! and an ordered sequence of subtrees. The tree is not a search tree. Values are
//! placed either at random (see [`Tree::insert`]) or under a chosen parent
//! (see [`Tree::insert_child`]), and no ordering between values is kept.

// these should not be public as they are merely separate files
// for some of the functions of this module
mod children;
mod implementations;
mod mutations;

pub mod iterators;

use children::Children;
pub use iterators::*;

/// A multiway tree. Might be empty.
///
/// Children are stored as [`Node`]s, never as [`Tree`]s, so an empty tree can
/// never be left dangling inside a child sequence: a node is empty exactly when
/// there is no node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<T> {
    Empty,
    Root(Box<Node<T>>),
}
use Tree::*;

/// A node. Can be viewed as a non-empty tree: it always holds a value.
///
/// `Clone` and `PartialEq` are implemented without recursion, in `implementations.rs`.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    children: Children<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Node<T> {
        Node {
            value,
            children: Children::default(),
        }
    }

    /// Builds a node with the given subtrees, in order.
    pub fn with_children(value: T, children: Vec<Node<T>>) -> Node<T> {
        Node {
            value,
            children: Children::from(children),
        }
    }

    /// Returns the value stored in this node specifically.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// A leaf is a node with no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over this node's subtree, depth first, parents before children.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(Some(self))
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Tree<T> {
    /// Returns an empty tree.
    pub fn new() -> Tree<T> {
        Empty
    }

    /// Returns a tree with a single value and no children.
    pub fn leaf(value: T) -> Tree<T> {
        Tree::from(Node::new(value))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    pub fn node(&self) -> Option<&Node<T>> {
        match self {
            Root(node) => Some(&**node),
            Empty => None,
        }
    }

    pub fn into_node(self) -> Option<Box<Node<T>>> {
        match self {
            Root(node) => Some(node),
            Empty => None,
        }
    }

    /// Returns the root value, if there is one.
    pub fn root(&self) -> Option<&T> {
        Some(self.node()?.value())
    }

    /// Returns the root's subtrees. An empty tree has none.
    pub fn children(&self) -> &[Node<T>] {
        match self {
            Root(node) => node.children(),
            Empty => &[],
        }
    }

    /// Iterates over all values, depth first, parents before children.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.node())
    }

    /// Iterates over the values of all nodes with no children,
    /// depth first, in child sequence order.
    pub fn leaves_iter(&self) -> Leaves<'_, T> {
        Leaves::new(self.node())
    }

    /// Number of values in the tree. Recomputed by traversal on every call.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes on the longest path from the root. `0` for the empty tree.
    pub fn depth(&self) -> usize {
        let mut stack: Vec<(&Node<T>, usize)> =
            self.node().map(|node| (node, 1)).into_iter().collect();
        let mut res = 0;
        while let Some((node, depth)) = stack.pop() {
            res = res.max(depth);
            stack.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        res
    }

    /// Returns the leaf values, depth first, in child sequence order.
    ///
    /// A root with no children is its own single leaf.
    pub fn leaves(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.leaves_iter().cloned().collect()
    }

    /// Structural equality: same values in the same shape and child order.
    /// Same as `==`.
    pub fn equals(&self, other: &Tree<T>) -> bool
    where
        T: PartialEq,
    {
        self == other
    }
}

impl<T: PartialEq> Tree<T> {
    /// Number of nodes whose value equals `item`.
    pub fn count(&self, item: &T) -> usize {
        self.iter().filter(|value| *value == item).count()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }
}

impl<T: Copy + Into<f64>> Tree<T> {
    pub fn sum(&self) -> f64 {
        self.iter().map(|&value| -> f64 { value.into() }).sum()
    }

    /// The arithmetic mean of all values.
    ///
    /// Returns `0.0` for the empty tree, so an empty tree and a tree whose values
    /// average to zero can't be told apart by this method alone.
    pub fn average(&self) -> f64 {
        let size = self.size();
        if size == 0 {
            return 0.0;
        }
        self.sum() / size as f64
    }
}
