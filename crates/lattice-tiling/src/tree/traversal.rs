//! Traversal and neighbor-finding on the pane tree.

use lattice_common::{Direction, Orientation, PaneId};

use super::{NodeId, NodeKind, PaneTree};

impl PaneTree {
    /// All pane IDs in depth-first, first-child-first order, including
    /// hidden stack members.
    pub fn pane_ids(&self) -> Vec<PaneId> {
        let mut ids = Vec::new();
        self.collect(self.root, false, &mut ids);
        ids
    }

    /// Pane IDs that are on screen: like [`pane_ids`](Self::pane_ids) but a
    /// stack contributes only its active member.
    pub fn visible_pane_ids(&self) -> Vec<PaneId> {
        let mut ids = Vec::new();
        self.collect(self.root, true, &mut ids);
        ids
    }

    fn collect(&self, id: NodeId, visible_only: bool, out: &mut Vec<PaneId>) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        match &node.kind {
            NodeKind::Leaf(pane) => out.push(pane.id.clone()),
            NodeKind::Split { children, .. } => {
                for child in children {
                    self.collect(*child, visible_only, out);
                }
            }
            NodeKind::Stack { children, active } => {
                if visible_only {
                    if let Some(child) = children.get(*active) {
                        self.collect(*child, visible_only, out);
                    }
                } else {
                    for child in children {
                        self.collect(*child, visible_only, out);
                    }
                }
            }
        }
    }

    /// Descend into `id` to a leaf. Stacks yield their active member; splits
    /// their last child when `from_end`, else their first.
    pub fn first_leaf(&self, id: NodeId, from_end: bool) -> Option<PaneId> {
        let node = self.nodes.get(&id)?;
        match &node.kind {
            NodeKind::Leaf(pane) => Some(pane.id.clone()),
            NodeKind::Stack { children, active } => {
                let child = children.get(*active).or_else(|| children.first())?;
                self.first_leaf(*child, from_end)
            }
            NodeKind::Split { children, .. } => {
                let child = if from_end {
                    children.last()
                } else {
                    children.first()
                }?;
                self.first_leaf(*child, from_end)
            }
        }
    }

    /// Structural neighbor of `pane_id` in `direction`: walk up to the
    /// nearest split on the matching axis that has a sibling on that side,
    /// then descend into the sibling from the facing edge.
    pub fn adjacent_pane(&self, pane_id: &PaneId, direction: Direction) -> Option<PaneId> {
        let (sibling, _) = self.adjacent_sibling(self.node_of(pane_id)?, direction)?;
        self.first_leaf(sibling, !direction.is_forward())
    }

    /// The sibling subtree next to `id` in `direction`, with the split it
    /// was found under.
    pub(crate) fn adjacent_sibling(&self, id: NodeId, direction: Direction) -> Option<(NodeId, NodeId)> {
        let axis = direction.orientation();
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            let node = self.nodes.get(&parent)?;
            if let NodeKind::Split {
                orientation,
                children,
                ..
            } = &node.kind
            {
                if *orientation == axis {
                    let idx = children.iter().position(|c| *c == current)?;
                    let target = if direction.is_forward() {
                        idx.checked_add(1)
                    } else {
                        idx.checked_sub(1)
                    };
                    if let Some(sibling) = target.and_then(|t| children.get(t)) {
                        return Some((*sibling, parent));
                    }
                }
            }
            current = parent;
        }
        None
    }

    /// Nearest ancestor split of `id` laid out along `axis`.
    pub fn nearest_split_on_axis(&self, id: NodeId, axis: Orientation) -> Option<NodeId> {
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            if let Some(NodeKind::Split { orientation, .. }) = self.nodes.get(&parent).map(|n| &n.kind) {
                if *orientation == axis {
                    return Some(parent);
                }
            }
            current = parent;
        }
        None
    }

    /// Next visible pane after `current`, wrapping around.
    pub fn next_pane(&self, current: &PaneId) -> Option<PaneId> {
        let ids = self.visible_pane_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|id| id == current)?;
        Some(ids[(idx + 1) % ids.len()].clone())
    }

    /// Previous visible pane before `current`, wrapping around.
    pub fn prev_pane(&self, current: &PaneId) -> Option<PaneId> {
        let ids = self.visible_pane_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|id| id == current)?;
        Some(ids[(idx + ids.len() - 1) % ids.len()].clone())
    }

    /// Depth of `id` below the root (root is 0).
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            depth += 1;
            current = parent;
        }
        depth
    }
}
