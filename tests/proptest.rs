pub mod common;
pub use common::*;

use copse::*;
use proptest::prelude::*;

pub fn round_action_strategy() -> impl Strategy<Value = RoundAction> {
    let value = 0..MAX_VALUE;
    prop_oneof![
        value.clone().prop_map(|value| RoundAction::Insert { value }),
        (value.clone(), value.clone())
            .prop_map(|(value, parent)| RoundAction::InsertChild { value, parent }),
        value.prop_map(|value| RoundAction::Delete { value }),
        Just(RoundAction::ExtractLeaf),
    ]
}

/// Builds a tree out of nested nodes, so that the shape isn't limited
/// to what the random insertion tends to produce.
pub fn node_strategy() -> impl Strategy<Value = Node<i32>> {
    let leaf = (0..MAX_VALUE).prop_map(Node::new);
    leaf.prop_recursive(5, 64, 6, |inner| {
        ((0..MAX_VALUE), proptest::collection::vec(inner, 0..6))
            .prop_map(|(value, children)| Node::with_children(value, children))
    })
}

pub fn tree_strategy() -> impl Strategy<Value = Tree<i32>> {
    prop_oneof![
        1 => Just(Tree::new()),
        9 => node_strategy().prop_map(Tree::from),
    ]
}

proptest! {
    #[test]
    fn rounds_agree_with_model(
        seed in any::<u64>(),
        initial in 0..100usize,
        actions in proptest::collection::vec(round_action_strategy(), 1..300),
    ) {
        let mut rng = seeded(seed);
        let mut tree = random_tree(&mut rng, initial);
        let mut model = Model::of(&tree);
        for round_action in &actions {
            run_round(round_action, &mut tree, &mut model, &mut rng);
        }
    }

    #[test]
    fn empty_iff_size_zero(tree in tree_strategy()) {
        prop_assert_eq!(tree.is_empty(), tree.size() == 0);
    }

    #[test]
    fn delete_removes_exactly_one(mut tree in tree_strategy(), value in 0..MAX_VALUE) {
        let before = tree.clone();
        let count = tree.count(&value);
        if tree.delete_item(&value) {
            prop_assert_eq!(tree.count(&value), count - 1);
            prop_assert_eq!(tree.size(), before.size() - 1);
        } else {
            prop_assert_eq!(count, 0);
            prop_assert!(tree.equals(&before));
        }
    }

    #[test]
    fn extract_takes_first_leaf(mut tree in tree_strategy()) {
        let leaves = tree.leaves();
        let size = tree.size();
        match tree.extract_leaf() {
            Ok(value) => {
                prop_assert_eq!(value, leaves[0]);
                prop_assert_eq!(tree.size(), size - 1);
            }
            Err(_) => prop_assert_eq!(size, 0),
        }
    }

    #[test]
    fn insert_child_contract(mut tree in tree_strategy(), value in 0..MAX_VALUE, parent in 0..MAX_VALUE) {
        let before = tree.clone();
        if tree.insert_child(value, &parent) {
            prop_assert!(before.contains(&parent));
            prop_assert_eq!(tree.size(), before.size() + 1);
            prop_assert_eq!(tree.count(&value), before.count(&value) + 1);
        } else {
            prop_assert!(!before.contains(&parent));
            prop_assert_eq!(&tree, &before);
        }
    }

    #[test]
    fn average_matches_flat_mean(tree in tree_strategy()) {
        let values: Vec<i32> = tree.iter().cloned().collect();
        let expected = if values.is_empty() {
            0.0
        } else {
            values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
        };
        prop_assert!((tree.average() - expected).abs() < 1e-9);
    }
}
