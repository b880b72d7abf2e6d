/*
Read-only view over the two tree representations (owned `TreeNode` and
index-based `TreeArena`), so traversal and counting are written once.

`Node` is a cheap handle: a shared reference for owned trees, a `NodeId`
for arena trees.
 */
use termtree::Tree;

use crate::arena::{NodeId, TreeArena};
use crate::tree::TreeNode;
use crate::tree_queue::LevelOrder;
use crate::tree_stack::{PostOrder, PreOrder};

pub trait BinaryTree {
    type Node: Copy;

    fn root(&self) -> Option<Self::Node>;
    fn value(&self, node: Self::Node) -> i32;
    fn left(&self, node: Self::Node) -> Option<Self::Node>;
    fn right(&self, node: Self::Node) -> Option<Self::Node>;

    fn pre_order(&self) -> PreOrder<'_, Self>
    where
        Self: Sized,
    {
        PreOrder::new(self)
    }

    fn post_order(&self) -> PostOrder<'_, Self>
    where
        Self: Sized,
    {
        PostOrder::new(self)
    }

    fn level_order(&self) -> LevelOrder<'_, Self>
    where
        Self: Sized,
    {
        LevelOrder::new(self)
    }

    /// Number of nodes.
    fn len(&self) -> usize
    where
        Self: Sized,
    {
        self.pre_order().count()
    }

    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Number of nodes on the longest root-to-leaf path, 0 for an empty tree.
    fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Self::Node, usize)> = self.root().map(|r| (r, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(self.left(node).map(|c| (c, depth + 1)));
            stack.extend(self.right(node).map(|c| (c, depth + 1)));
        }

        max_depth
    }

    /// Number of distinct downward paths, determined by shape alone.
    ///
    /// A node at depth `d` (root = 1) ends exactly `d` downward paths, one per
    /// ancestor-or-self start, so the total is the sum of all node depths.
    fn downward_path_count(&self) -> u64 {
        let mut total = 0u64;
        let mut stack: Vec<(Self::Node, u64)> = self.root().map(|r| (r, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            total += depth;
            stack.extend(self.left(node).map(|c| (c, depth + 1)));
            stack.extend(self.right(node).map(|c| (c, depth + 1)));
        }

        total
    }
}

impl<'a> BinaryTree for &'a TreeNode {
    type Node = &'a TreeNode;

    fn root(&self) -> Option<Self::Node> {
        Some(*self)
    }

    fn value(&self, node: Self::Node) -> i32 {
        node.val
    }

    fn left(&self, node: Self::Node) -> Option<Self::Node> {
        node.left.as_deref()
    }

    fn right(&self, node: Self::Node) -> Option<Self::Node> {
        node.right.as_deref()
    }
}

impl<'a> BinaryTree for Option<&'a TreeNode> {
    type Node = &'a TreeNode;

    fn root(&self) -> Option<Self::Node> {
        *self
    }

    fn value(&self, node: Self::Node) -> i32 {
        node.val
    }

    fn left(&self, node: Self::Node) -> Option<Self::Node> {
        node.left.as_deref()
    }

    fn right(&self, node: Self::Node) -> Option<Self::Node> {
        node.right.as_deref()
    }
}

// Handles reached through `root`/`left`/`right` always belong to this arena
// and nodes are never removed, so indexing cannot miss.
impl BinaryTree for TreeArena {
    type Node = NodeId;

    fn root(&self) -> Option<Self::Node> {
        TreeArena::root(self)
    }

    fn value(&self, node: Self::Node) -> i32 {
        self[node].val
    }

    fn left(&self, node: Self::Node) -> Option<Self::Node> {
        self[node].left
    }

    fn right(&self, node: Self::Node) -> Option<Self::Node> {
        self[node].right
    }
}

/// Deepest level rendered by [`TreeDisplay`]; anything below is shown as `...`.
pub const MAX_RENDER_DEPTH: usize = 64;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: BinaryTree> TreeDisplay for T {
    /// Built bottom-up with an explicit stack. Children are labelled `L:` / `R:`,
    /// and subtrees below [`MAX_RENDER_DEPTH`] collapse into a single `...` leaf,
    /// so the rendered tree stays shallow however deep the input is.
    fn to_tree_string(&self) -> Tree<String> {
        let mut built: Vec<Tree<String>> = Vec::new();
        // (node, label, depth, children already rendered)
        let mut stack: Vec<(<T as BinaryTree>::Node, String, usize, bool)> = self
            .root()
            .map(|r| (r, self.value(r).to_string(), 1, false))
            .into_iter()
            .collect();

        while let Some((node, label, depth, expanded)) = stack.pop() {
            let left = self.left(node);
            let right = self.right(node);

            if depth >= MAX_RENDER_DEPTH {
                let mut out = Tree::new(label);
                if left.is_some() || right.is_some() {
                    out.push(Tree::new("...".to_string()));
                }
                built.push(out);
            } else if expanded {
                // right was rendered last, so it sits on top
                let right_tree = right.and_then(|_| built.pop());
                let left_tree = left.and_then(|_| built.pop());
                built.push(Tree::new(label).with_leaves(left_tree.into_iter().chain(right_tree)));
            } else {
                stack.push((node, label, depth, true));
                if let Some(r) = right {
                    stack.push((r, format!("R: {}", self.value(r)), depth + 1, false));
                }
                if let Some(l) = left {
                    stack.push((l, format!("L: {}", self.value(l)), depth + 1, false));
                }
            }
        }

        built
            .pop()
            .unwrap_or_else(|| Tree::new("(empty)".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //     1
    //    / \
    //   2   3
    //  /
    // 4
    fn sample() -> TreeNode {
        TreeNode::new(1)
            .with_left(TreeNode::new(2).with_left(TreeNode::new(4)))
            .with_right(TreeNode::new(3))
    }

    #[test]
    fn test_shape_metrics() {
        let tree = sample();
        let view = &tree;
        assert_eq!(view.len(), 4);
        assert_eq!(view.height(), 3);
        // depths 1 + 2 + 2 + 3
        assert_eq!(view.downward_path_count(), 8);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_empty_view() {
        let empty: Option<&TreeNode> = None;
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.height(), 0);
        assert_eq!(empty.downward_path_count(), 0);
        assert_eq!(empty.to_tree_string().to_string().trim(), "(empty)");
    }

    #[test]
    fn test_arena_view_matches_owned_view() {
        let tree = sample();
        let arena = TreeArena::from(&tree);
        assert_eq!(arena.len(), (&tree).len());
        assert_eq!(BinaryTree::height(&arena), (&tree).height());
        assert_eq!(arena.downward_path_count(), (&tree).downward_path_count());
        assert_eq!(
            arena.to_tree_string().to_string(),
            (&tree).to_tree_string().to_string()
        );
    }

    #[test]
    fn test_render_collapses_below_depth_limit() {
        let mut node = TreeNode::new(0);
        for _ in 1..(MAX_RENDER_DEPTH + 10) {
            node = TreeNode::new(1).with_left(node);
        }
        let rendered = (&node).to_tree_string().to_string();
        // MAX_RENDER_DEPTH node lines plus the `...` marker
        assert_eq!(rendered.lines().count(), MAX_RENDER_DEPTH + 1);
        assert!(rendered.lines().last().unwrap().ends_with("..."));
        assert!(!rendered.contains("L: 0"));
    }
}
