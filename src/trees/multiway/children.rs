use super::*;
use std::ops::{Deref, DerefMut};

/// The ordered subtrees of a [`Node`].
///
/// The auto-generated deallocation code for a node is recursive, and randomly grown
/// trees can have arbitrary depth, so dropping a deep tree could overflow the stack.
/// Therefore the child sequence deallocates its nodes iteratively.
#[derive(Debug)]
pub struct Children<T>(Vec<Node<T>>);

impl<T> Default for Children<T> {
    fn default() -> Self {
        Children(vec![])
    }
}

impl<T> From<Vec<Node<T>>> for Children<T> {
    fn from(nodes: Vec<Node<T>>) -> Self {
        Children(nodes)
    }
}

impl<T> Deref for Children<T> {
    type Target = Vec<Node<T>>;
    fn deref(&self) -> &Vec<Node<T>> {
        &self.0
    }
}

impl<T> DerefMut for Children<T> {
    fn deref_mut(&mut self) -> &mut Vec<Node<T>> {
        &mut self.0
    }
}

impl<T> Drop for Children<T> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.0);
        // every popped node has its children moved out first,
        // so dropping it doesn't recurse
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children.0);
        }
    }
}
