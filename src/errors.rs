use thiserror::Error;

use crate::arena::{NodeId, Side};

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid level-order input at position {position}: {reason}")]
    InvalidLevelOrder {
        position: usize,
        reason: String,
    },

    /// The handle is stale or was issued by a different arena.
    #[error("Node not found in arena: {0:?}")]
    UnknownNode(NodeId),

    #[error("{side} child of node {parent:?} is already set")]
    ChildOccupied {
        parent: NodeId,
        side: Side,
    },

    #[error("Tree already has a root node")]
    RootOccupied,

    #[error("Invalid counter settings: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to render counter settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
