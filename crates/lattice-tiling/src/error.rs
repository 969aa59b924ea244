use lattice_common::{LatticeError, PaneId};

use crate::tree::NodeId;

/// Structural misuse of a pane tree. Always recoverable: the tree is left
/// exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TilingError {
    #[error("pane not found: {0}")]
    PaneNotFound(PaneId),

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("node {0} is not a leaf")]
    NotALeaf(NodeId),

    #[error("pane {0} is not in a stack")]
    NotInStack(PaneId),

    #[error("node {0} is not a split")]
    NotASplit(NodeId),

    #[error("pane already in tree: {0}")]
    DuplicatePane(PaneId),

    #[error("invalid tree: {0}")]
    InvalidTree(String),
}

impl From<TilingError> for LatticeError {
    fn from(err: TilingError) -> Self {
        LatticeError::Tiling(err.to_string())
    }
}
