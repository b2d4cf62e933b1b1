//! Depth-first iterators over a multiway tree.
//! They keep an explicit stack, so arbitrarily deep trees can be walked.

use super::*;

/// Iterates over the nodes of a subtree, parents before children,
/// children in sequence order.
pub struct Nodes<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Nodes {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // reversed, so that the first child is popped first
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Iterates over the values of a subtree, depth first.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Iter {
            nodes: Nodes::new(root),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.nodes.next()?.value())
    }
}

/// Iterates over the values of the nodes with no children, depth first.
pub struct Leaves<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Leaves<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Leaves {
            nodes: Nodes::new(root),
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.find(|node| node.is_leaf()).map(Node::value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
