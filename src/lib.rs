//! A multiway tree: a tree whose nodes have any number of ordered children.
//!
//! The tree can be grown at random (for generating test shapes), or under a chosen
//! parent, and shrinks by deleting values or extracting leaves.
//!
//!```
//! use copse::{Node, Tree};
//!
//! let mut tree = Tree::leaf(1);
//! assert!(tree.insert_child(5, &1));
//! assert_eq!(tree, Tree::from(Node::with_children(1, vec![Node::new(5)])));
//! assert_eq!(tree.leaves(), vec![5]);
//!
//! assert!(tree.delete_item(&1));
//! assert_eq!(tree, Tree::leaf(5));
//! assert_eq!(tree.extract_leaf(), Ok(5));
//! assert!(tree.is_empty());
//!```

pub mod error;
pub mod policy;
pub mod trees;

pub use error::TreeError;
pub use policy::InsertPolicy;
pub use trees::*;
