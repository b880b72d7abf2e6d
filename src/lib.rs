//! Count downward paths in a binary tree whose node values sum to a target.
//!
//! ```
//! use pathsum::{count_paths, TreeNode};
//!
//! //    5
//! //   / \
//! //  4   8
//! let tree = TreeNode::new(5)
//!     .with_left(TreeNode::new(4))
//!     .with_right(TreeNode::new(8));
//! assert_eq!(count_paths(Some(&tree), 9), 1);
//! assert_eq!(count_paths(None, 0), 0);
//! ```

pub mod arena;
pub mod builder;
pub mod config;
pub mod counter;
pub mod errors;
pub mod tree;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use arena::{ArenaNode, NodeId, Side, TreeArena};
pub use builder::{build_tree, TreeBuilder};
pub use config::{CountStrategy, CounterSettings, TraversalOrder};
pub use counter::PathCounter;
pub use errors::{TreeError, TreeResult};
pub use tree::TreeNode;
pub use tree_traits::{BinaryTree, TreeDisplay, MAX_RENDER_DEPTH};

/// Number of downward paths in the tree rooted at `root` whose node values sum
/// to `target`. An absent root counts 0.
///
/// Uses the default [`PathCounter`] (explicit-stack traversal), so arbitrarily
/// deep trees cannot overflow the stack. That does not make them fast: the
/// default strategy is O(n^2) and a degenerate chain hits the worst case. For
/// large or deep inputs use a counter with [`CountStrategy::PrefixSum`], which
/// is linear:
///
/// ```
/// use pathsum::{CountStrategy, CounterSettings, PathCounter, TreeNode};
///
/// let mut chain = TreeNode::new(0);
/// for _ in 1..100_000 {
///     chain = TreeNode::new(0).with_left(chain);
/// }
/// let counter = PathCounter::new(
///     CounterSettings::default().with_strategy(CountStrategy::PrefixSum),
/// );
/// assert_eq!(counter.count(&&chain, 0), 100_000 * 100_001 / 2);
/// ```
pub fn count_paths(root: Option<&TreeNode>, target: i64) -> u64 {
    PathCounter::default().count(&root, target)
}
