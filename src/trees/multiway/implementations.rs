//! This module implements the standard traits for [`Tree`] and [`Node`].
//! It is a separate file from the main module file, since it's a private module, and its
//! contents are re-exported.

use super::*;
use std::fmt;

/// Rendering of the empty tree.
const EMPTY_MARKER: &str = "<empty>";
const INDENT: usize = 2;
const NO_FRAME_ERROR: &str = "invariant violated: the frame stack can't be empty";

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(node: Node<T>) -> Self {
        Root(Box::new(node))
    }
}

/// Clones bottom up with an explicit stack of frames. Each frame holds a source node
/// and the clones of its children made so far.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut frames: Vec<(&Node<T>, Vec<Node<T>>)> = vec![(self, vec![])];
        loop {
            let (node, cloned) = frames.last_mut().expect(NO_FRAME_ERROR);
            let node: &Node<T> = *node;
            if let Some(child) = node.children.get(cloned.len()) {
                frames.push((child, Vec::with_capacity(child.children.len())));
                continue;
            }
            let (node, cloned) = frames.pop().expect(NO_FRAME_ERROR);
            let copy = Node::with_children(node.value.clone(), cloned);
            match frames.last_mut() {
                Some((_, siblings)) => siblings.push(copy),
                None => return copy,
            }
        }
    }
}

/// Structural equality, compared pairwise with an explicit stack.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value || left.children.len() != right.children.len() {
                return false;
            }
            stack.extend(left.children.iter().zip(right.children.iter()));
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// One line per node, depth first, indented by depth.
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", node.value, indent = depth * INDENT)?;
            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root(node) => fmt::Display::fmt(&**node, f),
            Empty => writeln!(f, "{}", EMPTY_MARKER),
        }
    }
}
