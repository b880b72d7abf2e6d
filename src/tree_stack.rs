/*
Stack based traversals.

The explicit stack mimics the call stack of the recursive version, so
traversal depth is limited by heap, not by thread stack size.
 */
use crate::tree_traits::BinaryTree;

/// Depth-first: node, left subtree, right subtree.
pub struct PreOrder<'t, T: BinaryTree> {
    tree: &'t T,
    stack: Vec<T::Node>,
}

impl<'t, T: BinaryTree> PreOrder<'t, T> {
    pub(crate) fn new(tree: &'t T) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'t, T: BinaryTree> Iterator for PreOrder<'t, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // right first, so left is popped next
        self.stack.extend(self.tree.right(current));
        self.stack.extend(self.tree.left(current));
        Some(current)
    }
}

/// Depth-first: left subtree, right subtree, node.
pub struct PostOrder<'t, T: BinaryTree> {
    tree: &'t T,
    stack: Vec<(T::Node, bool)>,
}

impl<'t, T: BinaryTree> PostOrder<'t, T> {
    pub(crate) fn new(tree: &'t T) -> Self {
        Self {
            tree,
            stack: tree.root().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'t, T: BinaryTree> Iterator for PostOrder<'t, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if visited {
                return Some(current);
            }
            self.stack.push((current, true));
            self.stack.extend(self.tree.right(current).map(|c| (c, false)));
            self.stack.extend(self.tree.left(current).map(|c| (c, false)));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    //       1
    //      / \
    //     2   5
    //    / \   \
    //   3   4   6
    fn sample() -> TreeNode {
        TreeNode::new(1)
            .with_left(
                TreeNode::new(2)
                    .with_left(TreeNode::new(3))
                    .with_right(TreeNode::new(4)),
            )
            .with_right(TreeNode::new(5).with_right(TreeNode::new(6)))
    }

    #[test]
    fn test_pre_order() {
        let tree = sample();
        let view = &tree;
        let values: Vec<i32> = view.pre_order().map(|n| n.val).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_post_order() {
        let tree = sample();
        let view = &tree;
        let values: Vec<i32> = view.post_order().map(|n| n.val).collect();
        assert_eq!(values, vec![3, 4, 2, 6, 5, 1]);
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let empty: Option<&TreeNode> = None;
        assert_eq!(empty.pre_order().count(), 0);
        assert_eq!(empty.post_order().count(), 0);
    }
}
