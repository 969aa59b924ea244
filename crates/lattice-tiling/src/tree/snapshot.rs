//! Nested, serializable view of a pane tree.
//!
//! This is what the session snapshot consumer receives after each state
//! change. The layout core does not write it anywhere itself.

use lattice_common::Orientation;
use serde::{Deserialize, Serialize};

use super::{NodeId, NodeKind, PaneTree};
use crate::error::TilingError;
use crate::pane::Pane;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeSnapshot {
    Leaf {
        pane: Pane,
    },
    Split {
        orientation: Orientation,
        ratio: f64,
        children: Vec<NodeSnapshot>,
    },
    Stack {
        active: usize,
        children: Vec<NodeSnapshot>,
    },
}

impl NodeSnapshot {
    pub fn leaf(pane: Pane) -> Self {
        NodeSnapshot::Leaf { pane }
    }

    pub fn split(orientation: Orientation, children: Vec<NodeSnapshot>) -> Self {
        NodeSnapshot::Split {
            orientation,
            ratio: 0.5,
            children,
        }
    }

    pub fn stack(active: usize, children: Vec<NodeSnapshot>) -> Self {
        NodeSnapshot::Stack { active, children }
    }
}

impl PaneTree {
    pub fn snapshot(&self) -> NodeSnapshot {
        self.snapshot_node(self.root)
    }

    fn snapshot_node(&self, id: NodeId) -> NodeSnapshot {
        let Some(node) = self.nodes.get(&id) else {
            return NodeSnapshot::Stack {
                active: 0,
                children: Vec::new(),
            };
        };
        match &node.kind {
            NodeKind::Leaf(pane) => NodeSnapshot::Leaf { pane: pane.clone() },
            NodeKind::Split {
                orientation,
                ratio,
                children,
            } => NodeSnapshot::Split {
                orientation: *orientation,
                ratio: *ratio,
                children: children.iter().map(|c| self.snapshot_node(*c)).collect(),
            },
            NodeKind::Stack { children, active } => NodeSnapshot::Stack {
                active: *active,
                children: children.iter().map(|c| self.snapshot_node(*c)).collect(),
            },
        }
    }

    /// Rebuild a tree from a snapshot (session restore). The result is
    /// validated; malformed input is rejected rather than repaired.
    pub fn from_snapshot(snapshot: &NodeSnapshot) -> Result<Self, TilingError> {
        let mut tree = Self {
            nodes: Default::default(),
            root: NodeId(0),
            index: Default::default(),
            next_node: 0,
        };
        tree.root = tree.restore(snapshot, None)?;
        tree.validate()?;
        Ok(tree)
    }

    fn restore(&mut self, snap: &NodeSnapshot, parent: Option<NodeId>) -> Result<NodeId, TilingError> {
        match snap {
            NodeSnapshot::Leaf { pane } => {
                if self.contains_pane(&pane.id) {
                    return Err(TilingError::DuplicatePane(pane.id.clone()));
                }
                Ok(self.alloc(parent, NodeKind::Leaf(pane.clone())))
            }
            NodeSnapshot::Split {
                orientation,
                ratio,
                children,
            } => {
                let id = self.alloc(
                    parent,
                    NodeKind::Split {
                        orientation: *orientation,
                        ratio: *ratio,
                        children: Vec::new(),
                    },
                );
                let kids = self.restore_children(children, id)?;
                if let Some(slot) = self.node_mut(id)?.children_mut() {
                    *slot = kids;
                }
                Ok(id)
            }
            NodeSnapshot::Stack { active, children } => {
                let id = self.alloc(
                    parent,
                    NodeKind::Stack {
                        children: Vec::new(),
                        active: *active,
                    },
                );
                let kids = self.restore_children(children, id)?;
                if let Some(slot) = self.node_mut(id)?.children_mut() {
                    *slot = kids;
                }
                Ok(id)
            }
        }
    }

    fn restore_children(
        &mut self,
        children: &[NodeSnapshot],
        parent: NodeId,
    ) -> Result<Vec<NodeId>, TilingError> {
        children
            .iter()
            .map(|c| self.restore(c, Some(parent)))
            .collect()
    }
}
