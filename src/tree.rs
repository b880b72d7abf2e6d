use std::collections::VecDeque;
use std::fmt;

use crate::tree_traits::TreeDisplay;

/// Owned binary tree node. Each node exclusively owns its children.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` all walk the tree with a heap
/// stack or queue, so a fully skewed tree of any length is safe to copy,
/// compare, print and free.
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: TreeNode) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: TreeNode) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Level-order values with `None` for empty child slots, trailing `None`s
    /// trimmed. Same shape `TreeBuilder::from_level_order` accepts.
    fn level_order_values(&self) -> Vec<Option<i32>> {
        let mut values = Vec::new();
        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::from([Some(self)]);

        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    values.push(Some(node.val));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => values.push(None),
            }
        }

        while values.last() == Some(&None) {
            values.pop();
        }
        values
    }
}

/*
The derived drop glue would recurse once per level of the tree, so a long
chain (e.g. a fully skewed tree) overflows the stack while being freed.
Children are detached onto a heap stack instead; every node dropped from the
loop has no children left, so its own drop does not recurse.
 */
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        let mut root = TreeNode::new(self.val);
        {
            // (source, copy whose children are still missing)
            let mut stack: Vec<(&TreeNode, &mut TreeNode)> = vec![(self, &mut root)];

            while let Some((src, dst)) = stack.pop() {
                let TreeNode { left, right, .. } = dst;
                if let Some(src_left) = src.left.as_deref() {
                    let copy = left.insert(Box::new(TreeNode::new(src_left.val)));
                    stack.push((src_left, &mut **copy));
                }
                if let Some(src_right) = src.right.as_deref() {
                    let copy = right.insert(Box::new(TreeNode::new(src_right.val)));
                    stack.push((src_right, &mut **copy));
                }
            }
        }
        root
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack: Vec<(&TreeNode, &TreeNode)> = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.val != b.val {
                return false;
            }
            for pair in [
                (a.left.as_deref(), b.left.as_deref()),
                (a.right.as_deref(), b.right.as_deref()),
            ] {
                match pair {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl Eq for TreeNode {}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeNode[")?;
        for (i, value) in self.level_order_values().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{}", v)?,
                None => write!(f, "null")?,
            }
        }
        write!(f, "]")
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
