use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::config::{CountStrategy, CounterSettings, TraversalOrder};
use crate::tree_traits::BinaryTree;

/// Counts downward paths whose node values sum to a target.
///
/// A path starts at any node and follows child links down to the same node or
/// one of its descendants. Node values are `i32`; sums are carried in `i64`,
/// so long paths of large values neither overflow nor wrap into false matches.
///
/// Every strategy returns the same count; they differ in time and stack use:
///
/// | strategy    | time   | stack        |
/// |-------------|--------|--------------|
/// | `Recursive` | O(n^2) | O(h) frames  |
/// | `Iterative` | O(n^2) | O(h) on heap |
/// | `PrefixSum` | O(n)   | O(h) on heap |
#[derive(Debug, Clone, Default)]
pub struct PathCounter {
    settings: CounterSettings,
}

impl PathCounter {
    pub fn new(settings: CounterSettings) -> Self {
        settings.validate();
        Self { settings }
    }

    pub fn settings(&self) -> &CounterSettings {
        &self.settings
    }

    #[instrument(level = "debug", skip(self, tree), fields(strategy = ?self.settings.strategy))]
    pub fn count<T: BinaryTree>(&self, tree: &T, target: i64) -> u64 {
        let total = match self.settings.strategy {
            CountStrategy::Recursive => count_recursive(tree, tree.root(), target),
            CountStrategy::Iterative => count_iterative(tree, self.settings.order, target),
            CountStrategy::PrefixSum => count_prefix_sums(tree, target),
        };
        debug!(total, "counted matching paths");
        total
    }
}

/// Outer pre-order recursion: every node is a candidate path start.
fn count_recursive<T: BinaryTree>(tree: &T, node: Option<T::Node>, target: i64) -> u64 {
    let Some(node) = node else {
        return 0;
    };
    accumulate_from_start(tree, Some(node), target, 0)
        + count_recursive(tree, tree.left(node), target)
        + count_recursive(tree, tree.right(node), target)
}

/// Inner recursion: walks every downward path below a start node carrying the
/// running sum. A match does not stop the walk, zeros and negative values
/// further down can bring the sum back to the target.
fn accumulate_from_start<T: BinaryTree>(
    tree: &T,
    node: Option<T::Node>,
    target: i64,
    sum: i64,
) -> u64 {
    let Some(node) = node else {
        return 0;
    };
    let sum = sum + i64::from(tree.value(node));
    u64::from(sum == target)
        + accumulate_from_start(tree, tree.left(node), target, sum)
        + accumulate_from_start(tree, tree.right(node), target, sum)
}

fn count_iterative<T: BinaryTree>(tree: &T, order: TraversalOrder, target: i64) -> u64 {
    let per_start = |start| accumulate_iterative(tree, start, target);
    match order {
        TraversalOrder::PreOrder => tree.pre_order().map(per_start).sum(),
        TraversalOrder::PostOrder => tree.post_order().map(per_start).sum(),
        TraversalOrder::LevelOrder => tree.level_order().map(per_start).sum(),
    }
}

/// Explicit-stack version of `accumulate_from_start`; each entry carries the
/// sum from the start node down to and including that entry's node.
fn accumulate_iterative<T: BinaryTree>(tree: &T, start: T::Node, target: i64) -> u64 {
    let mut matches = 0;
    let mut stack = vec![(start, i64::from(tree.value(start)))];

    while let Some((node, sum)) = stack.pop() {
        if sum == target {
            matches += 1;
        }
        for child in [tree.left(node), tree.right(node)].into_iter().flatten() {
            stack.push((child, sum + i64::from(tree.value(child))));
        }
    }

    matches
}

enum Step<N> {
    Enter(N, i64),
    Exit(i64),
}

/// Linear-time variant.
///
/// `seen` holds how often each prefix sum (root down to an ancestor, plus the
/// empty prefix 0) occurs on the current root-to-node path. A path ending at
/// `node` with sum `target` exists once for every ancestor prefix equal to
/// `sum(node) - target`.
fn count_prefix_sums<T: BinaryTree>(tree: &T, target: i64) -> u64 {
    let Some(root) = tree.root() else {
        return 0;
    };

    let mut seen: HashMap<i64, u64> = HashMap::from([(0, 1)]);
    let mut total = 0;
    let mut stack = vec![Step::Enter(root, 0)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node, parent_sum) => {
                let sum = parent_sum + i64::from(tree.value(node));
                // an unrepresentable difference cannot equal any prefix
                if let Some(count) = sum.checked_sub(target).and_then(|k| seen.get(&k)) {
                    total += count;
                }
                *seen.entry(sum).or_insert(0) += 1;

                stack.push(Step::Exit(sum));
                stack.extend(tree.right(node).map(|c| Step::Enter(c, sum)));
                stack.extend(tree.left(node).map(|c| Step::Enter(c, sum)));
            }
            Step::Exit(sum) => {
                if let Some(count) = seen.get_mut(&sum) {
                    *count -= 1;
                    if *count == 0 {
                        seen.remove(&sum);
                    }
                }
            }
        }
    }

    total
}
