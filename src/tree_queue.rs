use std::collections::VecDeque;

use crate::tree_traits::BinaryTree;

/// Breadth-first traversal, left to right within each level.
pub struct LevelOrder<'t, T: BinaryTree> {
    tree: &'t T,
    queue: VecDeque<T::Node>,
}

impl<'t, T: BinaryTree> LevelOrder<'t, T> {
    pub(crate) fn new(tree: &'t T) -> Self {
        Self {
            tree,
            queue: tree.root().into_iter().collect(),
        }
    }
}

impl<'t, T: BinaryTree> Iterator for LevelOrder<'t, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        self.queue.extend(self.tree.left(current));
        self.queue.extend(self.tree.right(current));
        Some(current)
    }
}
