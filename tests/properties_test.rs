//! Property tests: every strategy and outer order agrees with a brute-force
//! enumeration of downward paths

use pathsum::util::testing;
use pathsum::{BinaryTree, CountStrategy, CounterSettings, PathCounter, TraversalOrder, TreeArena, TreeNode};
use proptest::prelude::*;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn arb_tree_with(values: BoxedStrategy<i32>) -> impl Strategy<Value = TreeNode> {
    let leaf = values.clone().prop_map(TreeNode::new);
    leaf.prop_recursive(6, 64, 2, move |inner| {
        (
            values.clone(),
            proptest::option::of(inner.clone()),
            proptest::option::of(inner),
        )
            .prop_map(|(val, left, right)| {
                let mut node = TreeNode::new(val);
                node.left = left.map(Box::new);
                node.right = right.map(Box::new);
                node
            })
    })
}

fn arb_tree() -> impl Strategy<Value = TreeNode> {
    arb_tree_with((-4i32..=4).boxed())
}

/// Walks every root-to-node path and counts the suffixes that hit `target`.
fn brute_force(root: &TreeNode, target: i64) -> u64 {
    let mut total = 0;
    let mut stack: Vec<(&TreeNode, Vec<i64>)> = vec![(root, Vec::new())];

    while let Some((node, mut path)) = stack.pop() {
        path.push(i64::from(node.val));
        let mut sum = 0;
        for value in path.iter().rev() {
            sum += value;
            if sum == target {
                total += 1;
            }
        }
        for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
            stack.push((child, path.clone()));
        }
    }

    total
}

fn all_counters() -> Vec<PathCounter> {
    let iterative = CounterSettings::default().with_strategy(CountStrategy::Iterative);
    vec![
        PathCounter::new(CounterSettings::default().with_strategy(CountStrategy::Recursive)),
        PathCounter::new(iterative.clone().with_order(TraversalOrder::PreOrder)),
        PathCounter::new(iterative.clone().with_order(TraversalOrder::PostOrder)),
        PathCounter::new(iterative.with_order(TraversalOrder::LevelOrder)),
        PathCounter::new(CounterSettings::default().with_strategy(CountStrategy::PrefixSum)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn given_random_tree_when_counting_then_all_strategies_match_brute_force(
        tree in arb_tree(),
        target in -8i64..=8,
    ) {
        let expected = brute_force(&tree, target);
        for counter in all_counters() {
            prop_assert_eq!(counter.count(&&tree, target), expected, "{:?}", counter.settings());
        }
    }

    #[test]
    fn given_random_tree_when_converted_to_arena_then_counts_are_unchanged(
        tree in arb_tree(),
        target in -8i64..=8,
    ) {
        let arena = TreeArena::from(&tree);
        let round_trip = arena.to_tree();
        prop_assert_eq!(round_trip.as_ref(), Some(&tree));
        for counter in all_counters() {
            prop_assert_eq!(counter.count(&arena, target), counter.count(&&tree, target));
        }
    }

    #[test]
    fn given_all_zero_tree_when_counting_zero_then_count_is_shape_only(
        tree in arb_tree_with(Just(0).boxed()),
    ) {
        let view = &tree;
        let expected = view.downward_path_count();
        for counter in all_counters() {
            prop_assert_eq!(counter.count(&view, 0), expected);
        }
    }

    #[test]
    fn given_random_tree_when_traversing_then_every_order_visits_each_node_once(
        tree in arb_tree(),
    ) {
        let view = &tree;
        let mut pre: Vec<*const TreeNode> = view.pre_order().map(|n| n as *const TreeNode).collect();
        let mut post: Vec<*const TreeNode> = view.post_order().map(|n| n as *const TreeNode).collect();
        let mut level: Vec<*const TreeNode> = view.level_order().map(|n| n as *const TreeNode).collect();
        prop_assert_eq!(pre.len(), view.len());
        pre.sort();
        post.sort();
        level.sort();
        prop_assert_eq!(&pre, &post);
        prop_assert_eq!(&pre, &level);
        pre.dedup();
        prop_assert_eq!(pre.len(), view.len());
    }
}
