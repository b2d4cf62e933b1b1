//! Structural edits: random and targeted insertion, deletion with root promotion,
//! and leftmost leaf extraction.

use super::*;
use crate::error::{Result, TreeError};
use crate::policy::InsertPolicy;
use rand::Rng;
use tracing::{debug, trace};

/// What happened to a subtree during [`Node::delete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deletion {
    /// The value wasn't in this subtree.
    Absent,
    /// One occurrence was removed and the subtree still has a value.
    Removed,
    /// The subtree was a single node holding the value. The caller must remove it.
    Vacated,
}

impl<T> Tree<T> {
    /// Inserts `item` at a random position, with the default [`InsertPolicy`].
    ///
    /// An empty tree gets `item` as its root. A node with no children gets
    /// `item` as its first child. Otherwise, with probability 1/3 `item` becomes
    /// a new last child, and with probability 2/3 it is inserted
    /// into a uniformly chosen child instead.
    ///
    /// The shape of the result is random: only the size and the contents of the tree
    /// are determined, unless `rng` is seeded.
    pub fn insert<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.insert_with(item, rng, &InsertPolicy::default())
    }

    /// Like [`Tree::insert`], with the chance of growing breadth
    /// taken from `policy`.
    pub fn insert_with<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R, policy: &InsertPolicy) {
        let mut node: &mut Node<T> = match self {
            Root(node) => node,
            Empty => {
                trace!("planting root");
                *self = Tree::leaf(item);
                return;
            }
        };
        let mut depth = 0;
        loop {
            if node.is_leaf() || rng.gen_bool(policy.breadth_probability()) {
                trace!(depth, width = node.children.len(), "appending child");
                node.children.push(Node::new(item));
                return;
            }
            let index = rng.gen_range(0..node.children.len());
            node = &mut node.children[index];
            depth += 1;
        }
    }

    /// Extracts the leftmost leaf: the node reached from the root by always taking
    /// the first child. Returns its value.
    ///
    /// If the root has no children, the root itself is extracted and the tree becomes empty.
    /// The parent of an extracted leaf keeps its value, and becomes a leaf itself
    /// if it had no other children.
    ///
    /// Fails on the empty tree, without changing it.
    pub fn extract_leaf(&mut self) -> Result<T> {
        let node = match self {
            Root(node) => node,
            Empty => return Err(extract_from_empty()),
        };
        if let Some(value) = node.extract_leaf_below() {
            return Ok(value);
        }
        debug!("extracting the root, the tree becomes empty");
        match std::mem::replace(self, Empty) {
            Root(node) => Ok(node.into_value()),
            Empty => Err(extract_from_empty()),
        }
    }
}

fn extract_from_empty() -> TreeError {
    TreeError::EmptyTree {
        operation: "extract a leaf",
    }
}

impl<T: PartialEq> Tree<T> {
    /// Inserts `item` as a new last child of the first node holding `parent`,
    /// in depth first order. Even if `parent` occurs several times, only the first
    /// occurrence receives a child.
    ///
    /// Returns `false` and leaves the tree unchanged if `parent` doesn't occur
    /// (in particular, if the tree is empty).
    pub fn insert_child(&mut self, item: T, parent: &T) -> bool {
        let root: &mut Node<T> = match self {
            Root(node) => node,
            Empty => return false,
        };
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.value == *parent {
                trace!(width = node.children.len(), "found parent");
                node.children.push(Node::new(item));
                return true;
            }
            stack.extend(node.children.iter_mut().rev());
        }
        false
    }

    /// Deletes the first occurrence of `item`, in depth first order.
    /// Returns whether a value was deleted; if not, the tree is unchanged.
    ///
    /// If the deleted node has children, its first child is promoted into its place:
    /// the child's value replaces the deleted value, and the child's own children
    /// are appended after the remaining children. Otherwise the node is removed
    /// from its parent, or the tree becomes empty if it was the root.
    pub fn delete_item(&mut self, item: &T) -> bool {
        let deletion = match self {
            Root(node) => node.delete(item),
            Empty => Deletion::Absent,
        };
        match deletion {
            Deletion::Absent => false,
            Deletion::Removed => true,
            Deletion::Vacated => {
                debug!("deleted the only value, the tree becomes empty");
                *self = Empty;
                true
            }
        }
    }
}

impl<T> Node<T> {
    /// Removes the leftmost leaf strictly below this node and returns its value.
    /// Returns `None` if this node is a leaf itself, since a node can't remove itself.
    fn extract_leaf_below(&mut self) -> Option<T> {
        if self.is_leaf() {
            return None;
        }
        let mut node = self;
        let mut depth = 1;
        while !node.children[0].is_leaf() {
            node = &mut node.children[0];
            depth += 1;
        }
        trace!(depth, "extracting leaf");
        Some(node.children.remove(0).into_value())
    }

    /// Replaces this node's value by its first child's value, and moves the
    /// first child's children to the end of this node's children.
    fn promote_first_child(&mut self) -> Deletion {
        if self.is_leaf() {
            return Deletion::Vacated;
        }
        let mut first = self.children.remove(0);
        trace!(
            grandchildren = first.children.len(),
            "promoting first child"
        );
        std::mem::swap(&mut self.value, &mut first.value);
        self.children.append(&mut first.children);
        Deletion::Removed
    }
}

impl<T: PartialEq> Node<T> {
    /// Returns the child indices leading from this node to the first node holding
    /// `item`, in depth first order. An empty path means this node holds it.
    ///
    /// The search keeps a stack of `(node, next child index)` frames, so deep trees
    /// don't overflow the call stack.
    fn find_path(&self, item: &T) -> Option<Vec<usize>> {
        if self.value == *item {
            return Some(vec![]);
        }
        let mut frames: Vec<(&Node<T>, usize)> = vec![(self, 0)];
        while let Some((node, next)) = frames.last_mut() {
            let node: &Node<T> = *node;
            let child = match node.children.get(*next) {
                Some(child) => child,
                None => {
                    frames.pop();
                    continue;
                }
            };
            *next += 1;
            if child.value == *item {
                // every frame's index has already moved past the child it descended into
                return Some(frames.iter().map(|&(_, next)| next - 1).collect());
            }
            frames.push((child, 0));
        }
        None
    }

    fn delete(&mut self, item: &T) -> Deletion {
        let path = match self.find_path(item) {
            Some(path) => path,
            None => return Deletion::Absent,
        };
        let (&index, ancestors) = match path.split_last() {
            Some(split) => split,
            None => return self.promote_first_child(),
        };
        let mut parent = self;
        for &ancestor in ancestors {
            parent = &mut parent.children[ancestor];
        }
        trace!(depth = path.len(), "found value to delete");
        if parent.children[index].promote_first_child() == Deletion::Vacated {
            // index based, since the vacated child must leave its parent's sequence
            trace!(index, "pruning vacated child");
            parent.children.remove(index);
        }
        Deletion::Removed
    }
}
