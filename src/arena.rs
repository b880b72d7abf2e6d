use std::collections::HashMap;
use std::fmt;
use std::ops;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::tree::TreeNode;
use crate::tree_traits::{BinaryTree, TreeDisplay};

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node of one particular [`TreeArena`].
///
/// Carries the id of the arena that issued it, so a handle from another arena
/// is rejected even when its slot and generation happen to exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    arena: u64,
    index: Index,
}

/// Tree node in the arena-based binary tree.
#[derive(Debug, Clone)]
pub struct ArenaNode {
    pub val: i32,
    /// Parent node, None for the root
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl ArenaNode {
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Arena-based binary tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are only ever added, never removed, so every `NodeId` handed out
/// stays valid for the lifetime of the arena.
#[derive(Debug)]
pub struct TreeArena {
    /// Identity stamped into every `NodeId` this arena hands out
    id: u64,
    arena: Arena<ArenaNode>,
    /// Root node, None for empty trees
    root: Option<NodeId>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, val: i32) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        Ok(self.insert_node(val, None))
    }

    /// Attaches a new node in the empty `side` slot of `parent`.
    ///
    /// `parent` must have been issued by this arena; handles from any other
    /// arena are `UnknownNode`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: NodeId, side: Side, val: i32) -> TreeResult<NodeId> {
        let parent_node = self
            .get_node(parent)
            .ok_or(TreeError::UnknownNode(parent))?;
        if parent_node.child(side).is_some() {
            return Err(TreeError::ChildOccupied { parent, side });
        }
        Ok(self.insert_node(val, Some((parent, side))))
    }

    fn insert_node(&mut self, val: i32, parent: Option<(NodeId, Side)>) -> NodeId {
        let node = ArenaNode {
            val,
            parent: parent.map(|(idx, _)| idx),
            left: None,
            right: None,
        };
        let node_idx = NodeId {
            arena: self.id,
            index: self.arena.insert(node),
        };

        match parent {
            Some((parent_idx, side)) => {
                if let Some(parent) = self.arena.get_mut(parent_idx.index) {
                    match side {
                        Side::Left => parent.left = Some(node_idx),
                        Side::Right => parent.right = Some(node_idx),
                    }
                }
            }
            None => self.root = Some(node_idx),
        }

        node_idx
    }

    /// None for removed slots and for handles issued by another arena.
    pub fn get_node(&self, idx: NodeId) -> Option<&ArenaNode> {
        if idx.arena != self.id {
            return None;
        }
        self.arena.get(idx.index)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Converts into an owned tree.
    ///
    /// Post-order guarantees both children are built before their parent,
    /// so no recursion is needed.
    #[instrument(level = "debug", skip(self))]
    pub fn to_tree(&self) -> Option<TreeNode> {
        let mut built: HashMap<NodeId, TreeNode> = HashMap::with_capacity(self.len());

        for idx in self.post_order() {
            let node = &self[idx];
            let mut owned = TreeNode::new(node.val);
            owned.left = node.left.and_then(|c| built.remove(&c)).map(Box::new);
            owned.right = node.right.and_then(|c| built.remove(&c)).map(Box::new);
            built.insert(idx, owned);
        }

        let tree = self.root.and_then(|r| built.remove(&r));
        debug!(nodes = self.len(), "converted arena to owned tree");
        tree
    }
}

/// Panics when `idx` was not issued by this arena, like slice indexing out of bounds.
impl ops::Index<NodeId> for TreeArena {
    type Output = ArenaNode;

    fn index(&self, idx: NodeId) -> &Self::Output {
        match self.get_node(idx) {
            Some(node) => node,
            None => panic!("node {:?} does not belong to this arena", idx),
        }
    }
}

impl From<&TreeNode> for TreeArena {
    fn from(root: &TreeNode) -> Self {
        let mut tree = TreeArena::new();
        let mut stack: Vec<(&TreeNode, Option<(NodeId, Side)>)> = vec![(root, None)];

        while let Some((node, parent)) = stack.pop() {
            let idx = tree.insert_node(node.val, parent);
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some((idx, Side::Right))));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, Some((idx, Side::Left))));
            }
        }

        tree
    }
}

impl fmt::Display for TreeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
