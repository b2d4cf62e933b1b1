//! This module contains the tree types of the crate.
//!
//! Currently there is one: the [`multiway`] tree, where every node has any number of
//! children, in order.

pub mod multiway;

pub use multiway::{Node, Tree};
