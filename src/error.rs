use thiserror::Error;

/// Errors reported by tree operations.
///
/// Missing targets in [`crate::Tree::insert_child`] and [`crate::Tree::delete_item`]
/// are not errors: those operations just return `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// The operation needs at least one value in the tree.
    #[error("cannot {operation} on an empty tree")]
    EmptyTree { operation: &'static str },

    #[error("branch probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
