//! Placement policy for the randomized [`crate::Tree::insert`].

use crate::error::{Result, TreeError};

/// Chance of growing breadth instead of depth, used when no policy is given.
pub const DEFAULT_BREADTH_PROBABILITY: f64 = 1.0 / 3.0;

/// Controls how [`crate::Tree::insert_with`] places a new value at a node
/// that already has children: with probability `breadth_probability` the
/// value becomes a new direct child, otherwise a uniformly chosen child
/// is descended into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsertPolicy {
    breadth_probability: f64,
}

impl InsertPolicy {
    pub fn new(breadth_probability: f64) -> Result<Self> {
        // also rejects NaN
        if (0.0..=1.0).contains(&breadth_probability) {
            Ok(InsertPolicy {
                breadth_probability,
            })
        } else {
            Err(TreeError::InvalidProbability(breadth_probability))
        }
    }

    pub fn breadth_probability(&self) -> f64 {
        self.breadth_probability
    }
}

impl Default for InsertPolicy {
    fn default() -> Self {
        InsertPolicy {
            breadth_probability: DEFAULT_BREADTH_PROBABILITY,
        }
    }
}
