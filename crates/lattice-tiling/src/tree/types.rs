//! Core types for the pane tree: node identity, node kinds, and the arena.

use std::collections::HashMap;
use std::fmt;

use lattice_common::{Orientation, PaneId};
use serde::{Deserialize, Serialize};

use crate::pane::Pane;

/// Identity of a tree node, unique within one workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// What a node is. A node is exactly one of these at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf(Pane),
    /// Children laid out side by side along `orientation`. `ratio` is the
    /// share of the first child when there are exactly two.
    Split {
        orientation: Orientation,
        ratio: f64,
        children: Vec<NodeId>,
    },
    /// Overlapping children; only `children[active]` is visible.
    Stack { children: Vec<NodeId>, active: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaneNode {
    pub(crate) id: NodeId,
    /// Non-owning back-reference; `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl PaneNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn pane(&self) -> Option<&Pane> {
        match &self.kind {
            NodeKind::Leaf(pane) => Some(pane),
            _ => None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Split { children, .. } | NodeKind::Stack { children, .. } => children,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Split { children, .. } | NodeKind::Stack { children, .. } => Some(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    pub fn is_stacked(&self) -> bool {
        matches!(self.kind, NodeKind::Stack { .. })
    }

    pub fn active_stack_index(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Stack { active, .. } => Some(active),
            _ => None,
        }
    }
}

/// The pane tree of one workspace.
///
/// Nodes live in an arena keyed by [`NodeId`]; parents own their children
/// through the `children` lists and children point back through `parent`.
/// A pane-id index gives O(1) lookup of leaves.
#[derive(Debug, Clone)]
pub struct PaneTree {
    pub(crate) nodes: HashMap<NodeId, PaneNode>,
    pub(crate) root: NodeId,
    pub(crate) index: HashMap<PaneId, NodeId>,
    pub(crate) next_node: u64,
}

impl PaneTree {
    /// A tree holding a single leaf.
    pub fn new(pane: Pane) -> Self {
        let mut tree = Self {
            nodes: HashMap::new(),
            root: NodeId(0),
            index: HashMap::new(),
            next_node: 0,
        };
        tree.root = tree.alloc(None, NodeKind::Leaf(pane));
        tree
    }

    // -- Accessors --

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&PaneNode> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn pane_count(&self) -> usize {
        self.index.len()
    }

    pub fn contains_pane(&self, pane_id: &PaneId) -> bool {
        self.index.contains_key(pane_id)
    }

    /// The leaf node holding `pane_id`.
    pub fn node_of(&self, pane_id: &PaneId) -> Option<NodeId> {
        self.index.get(pane_id).copied()
    }

    pub fn pane(&self, pane_id: &PaneId) -> Option<&Pane> {
        self.node_of(pane_id)
            .and_then(|id| self.nodes.get(&id))
            .and_then(PaneNode::pane)
    }

    pub fn pane_mut(&mut self, pane_id: &PaneId) -> Option<&mut Pane> {
        let id = self.node_of(pane_id)?;
        match &mut self.nodes.get_mut(&id)?.kind {
            NodeKind::Leaf(pane) => Some(pane),
            _ => None,
        }
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// The stack directly containing `pane_id`, if any.
    pub fn stack_of(&self, pane_id: &PaneId) -> Option<NodeId> {
        let parent = self.parent_of(self.node_of(pane_id)?)?;
        self.nodes
            .get(&parent)
            .filter(|n| n.is_stacked())
            .map(|n| n.id)
    }

    /// Position of `id` among its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.nodes.get(&self.parent_of(id)?)?;
        parent.children().iter().position(|c| *c == id)
    }
}
