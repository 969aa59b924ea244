//! Read-only view of a stack node.

use lattice_common::PaneId;

use crate::tree::{NodeId, NodeKind, PaneTree};

/// A stack node: overlapping members, one visible at a time.
#[derive(Debug, Clone, Copy)]
pub struct StackView<'a> {
    tree: &'a PaneTree,
    id: NodeId,
    members: &'a [NodeId],
    active: usize,
}

impl<'a> StackView<'a> {
    pub(crate) fn new(tree: &'a PaneTree, id: NodeId) -> Option<Self> {
        match tree.node(id)?.kind() {
            NodeKind::Stack { children, active } => Some(Self {
                tree,
                id,
                members: children,
                active: *active,
            }),
            _ => None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &'a [NodeId] {
        self.members
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The pane shown for the active member.
    pub fn active_pane(&self) -> Option<PaneId> {
        self.tree.first_leaf(*self.members.get(self.active)?, false)
    }

    /// Index of the member that holds `pane_id` (directly or nested).
    pub fn position_of(&self, pane_id: &PaneId) -> Option<usize> {
        let mut node = self.tree.node_of(pane_id)?;
        loop {
            let parent = self.tree.parent_of(node)?;
            if parent == self.id {
                return self.members.iter().position(|m| *m == node);
            }
            node = parent;
        }
    }

    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.members
            .iter()
            .filter_map(|m| self.tree.first_leaf(*m, false))
            .collect()
    }
}
