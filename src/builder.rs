use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::arena::{NodeId, Side, TreeArena};
use crate::errors::{TreeError, TreeResult};
use crate::tree::TreeNode;

/// Builds binary trees from level-order value lists.
///
/// The first entry is the root. Then, for each present node in queue order,
/// one entry describes its left child and the next its right child; `None`
/// means the slot is empty. Trailing `None`s are accepted, a present value
/// with no parent left to adopt it is not.
///
/// `[Some(1), None, Some(2)]` is a root `1` with a single right child `2`.
#[derive(Debug, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip(self, values), fields(len = values.len()))]
    pub fn from_level_order(&self, values: &[Option<i32>]) -> TreeResult<TreeArena> {
        let mut tree = TreeArena::new();
        let mut entries = values.iter().copied().enumerate();

        match entries.next() {
            None | Some((_, None)) => {
                // nothing can hang below an absent root
                if let Some((position, _)) = entries.find(|(_, v)| v.is_some()) {
                    return Err(TreeError::InvalidLevelOrder {
                        position,
                        reason: "value after an empty root".to_string(),
                    });
                }
                debug!("empty tree");
                return Ok(tree);
            }
            Some((_, Some(val))) => {
                let root = tree.insert_root(val)?;
                let mut parents: VecDeque<NodeId> = VecDeque::from([root]);

                while let Some((position, value)) = entries.next() {
                    let Some(parent) = parents.pop_front() else {
                        if value.is_some() {
                            return Err(orphan(position));
                        }
                        continue;
                    };

                    if let Some(val) = value {
                        parents.push_back(tree.insert_child(parent, Side::Left, val)?);
                    }
                    if let Some((_, Some(val))) = entries.next() {
                        parents.push_back(tree.insert_child(parent, Side::Right, val)?);
                    }
                }
            }
        }

        debug!(nodes = tree.len(), "built tree from level order");
        Ok(tree)
    }

    pub fn build_tree(&self, values: &[Option<i32>]) -> TreeResult<Option<TreeNode>> {
        Ok(self.from_level_order(values)?.to_tree())
    }
}

fn orphan(position: usize) -> TreeError {
    TreeError::InvalidLevelOrder {
        position,
        reason: "no parent slot left for value".to_string(),
    }
}

/// Shorthand for `TreeBuilder::new().build_tree(values)`.
pub fn build_tree(values: &[Option<i32>]) -> TreeResult<Option<TreeNode>> {
    TreeBuilder::new().build_tree(values)
}
