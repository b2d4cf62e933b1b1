use copse::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Insert { value: i32 },
    InsertChild { value: i32, parent: i32 },
    Delete { value: i32 },
    ExtractLeaf,
}

/// A flat model of the tree's contents: how many times each value occurs.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Model {
    counts: HashMap<i32, usize>,
}

impl Model {
    pub fn of(tree: &Tree<i32>) -> Model {
        let mut model = Model::default();
        for &value in tree {
            model.add(value);
        }
        model
    }

    pub fn add(&mut self, value: i32) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    pub fn remove(&mut self, value: i32) -> bool {
        match self.counts.get_mut(&value) {
            None => false,
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&value);
                }
                true
            }
        }
    }

    pub fn count(&self, value: i32) -> usize {
        self.counts.get(&value).cloned().unwrap_or(0)
    }

    pub fn size(&self) -> usize {
        self.counts.values().sum()
    }
}

pub const MAX_VALUE: i32 = 20;

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Grows a tree with `len` random values in `0..MAX_VALUE`.
pub fn random_tree<R: Rng>(rng: &mut R, len: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for _ in 0..len {
        let value = rng.gen_range(0..MAX_VALUE);
        tree.insert(value, rng);
    }
    tree
}

pub fn random_round_action<R: Rng>(rng: &mut R) -> RoundAction {
    use RoundAction::*;
    match rng.gen_range(0..4) {
        0 => Insert {
            value: rng.gen_range(0..MAX_VALUE),
        },
        1 => InsertChild {
            value: rng.gen_range(0..MAX_VALUE),
            parent: rng.gen_range(0..MAX_VALUE),
        },
        2 => Delete {
            value: rng.gen_range(0..MAX_VALUE),
        },
        _ => ExtractLeaf,
    }
}

/// Checks that the tree agrees with itself: emptiness matches size,
/// every leaf is a stored value, and the depth fits the size.
pub fn assert_correctness(tree: &Tree<i32>) {
    let size = tree.size();
    assert_eq!(tree.is_empty(), size == 0);
    assert_eq!(tree.iter().count(), size);
    assert!(tree.depth() <= size);
    if size > 0 {
        assert!(!tree.leaves().is_empty());
    }
    for leaf in tree.leaves() {
        assert!(tree.contains(&leaf));
    }
}

/// Performs one round on both the tree and the model, checking the
/// operation's contract along the way.
pub fn run_round<R: Rng>(
    round_action: &RoundAction,
    tree: &mut Tree<i32>,
    model: &mut Model,
    rng: &mut R,
) {
    use RoundAction::*;
    let before = tree.clone();
    match *round_action {
        Insert { value } => {
            tree.insert(value, rng);
            model.add(value);
        }
        InsertChild { value, parent } => {
            let present = model.count(parent) > 0;
            assert_eq!(tree.insert_child(value, &parent), present);
            if present {
                model.add(value);
            } else {
                assert_eq!(*tree, before);
            }
        }
        Delete { value } => {
            let present = model.remove(value);
            assert_eq!(tree.delete_item(&value), present);
            if !present {
                assert_eq!(*tree, before);
            }
        }
        ExtractLeaf => match tree.extract_leaf() {
            Ok(value) => {
                assert!(before.leaves().contains(&value));
                assert!(model.remove(value));
            }
            Err(error) => {
                assert!(before.is_empty());
                assert!(matches!(error, TreeError::EmptyTree { .. }));
                assert!(tree.is_empty());
            }
        },
    }
    assert_eq!(tree.size(), model.size());
    assert_eq!(Model::of(tree), *model);
    assert_correctness(tree);
}
