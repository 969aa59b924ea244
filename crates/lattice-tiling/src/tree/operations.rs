//! Low-level structural edits on the arena. Callers in `workspace` and
//! `stack` check preconditions; these helpers keep parent links, the pane
//! index, and stack indices consistent.

use lattice_common::{Orientation, PaneId};

use super::{NodeId, NodeKind, PaneNode, PaneTree};
use crate::error::TilingError;
use crate::pane::Pane;

/// Result of unlinking a node from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Detached {
    pub parent: NodeId,
    /// Set when the parent was left with one child and replaced by it.
    pub promoted: Option<NodeId>,
}

impl PaneTree {
    pub(crate) fn alloc(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        if let NodeKind::Leaf(pane) = &kind {
            self.index.insert(pane.id.clone(), id);
        }
        self.nodes.insert(id, PaneNode { id, parent, kind });
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut PaneNode, TilingError> {
        self.nodes.get_mut(&id).ok_or(TilingError::NodeNotFound(id))
    }

    /// Put `new` in the slot `old` occupies (a parent's child list or the
    /// root). `old` keeps its own parent link; callers re-home it.
    pub(crate) fn replace_in_parent(&mut self, old: NodeId, new: NodeId) {
        let parent = self.parent_of(old);
        match parent {
            Some(p) => {
                if let Some(children) = self.nodes.get_mut(&p).and_then(PaneNode::children_mut) {
                    if let Some(slot) = children.iter_mut().find(|c| **c == old) {
                        *slot = new;
                    }
                }
            }
            None => self.root = new,
        }
        if let Some(node) = self.nodes.get_mut(&new) {
            node.parent = parent;
        }
    }

    /// Replace `anchor` with a two-child split holding `anchor` and a new
    /// leaf for `pane`. Returns `(split, leaf)`.
    pub(crate) fn wrap_in_split(
        &mut self,
        anchor: NodeId,
        pane: Pane,
        orientation: Orientation,
        new_first: bool,
    ) -> Result<(NodeId, NodeId), TilingError> {
        if !self.nodes.contains_key(&anchor) {
            return Err(TilingError::NodeNotFound(anchor));
        }
        if self.contains_pane(&pane.id) {
            return Err(TilingError::DuplicatePane(pane.id));
        }
        let split = self.alloc(
            None,
            NodeKind::Split {
                orientation,
                ratio: 0.5,
                children: Vec::new(),
            },
        );
        self.replace_in_parent(anchor, split);
        let leaf = self.alloc(Some(split), NodeKind::Leaf(pane));
        self.node_mut(anchor)?.parent = Some(split);
        if let Some(children) = self.node_mut(split)?.children_mut() {
            *children = if new_first {
                vec![leaf, anchor]
            } else {
                vec![anchor, leaf]
            };
        }
        Ok((split, leaf))
    }

    /// Replace `anchor` with a stack whose only member is `anchor`.
    pub(crate) fn wrap_in_stack(&mut self, anchor: NodeId) -> Result<NodeId, TilingError> {
        if !self.nodes.contains_key(&anchor) {
            return Err(TilingError::NodeNotFound(anchor));
        }
        let stack = self.alloc(
            None,
            NodeKind::Stack {
                children: vec![anchor],
                active: 0,
            },
        );
        self.replace_in_parent(anchor, stack);
        self.node_mut(anchor)?.parent = Some(stack);
        Ok(stack)
    }

    /// Unlink `child` from its parent. The parent's stack index is adjusted
    /// so the same member stays visible when possible; a parent left with a
    /// single child is dissolved and that child promoted into its slot.
    pub(crate) fn detach(&mut self, child: NodeId) -> Result<Detached, TilingError> {
        let parent = self
            .parent_of(child)
            .ok_or_else(|| TilingError::InvalidTree(format!("cannot detach root {child}")))?;

        let remaining = {
            let node = self.node_mut(parent)?;
            let removed_at = match &mut node.kind {
                NodeKind::Leaf(_) => None,
                NodeKind::Split { children, .. } => {
                    let pos = children.iter().position(|c| *c == child);
                    if let Some(pos) = pos {
                        children.remove(pos);
                    }
                    pos
                }
                NodeKind::Stack { children, active } => {
                    let pos = children.iter().position(|c| *c == child);
                    if let Some(pos) = pos {
                        children.remove(pos);
                        if pos < *active {
                            *active -= 1;
                        }
                        if *active >= children.len() {
                            *active = children.len().saturating_sub(1);
                        }
                    }
                    pos
                }
            };
            if removed_at.is_none() {
                return Err(TilingError::InvalidTree(format!(
                    "{child} missing from parent {parent}"
                )));
            }
            node.children().to_vec()
        };
        self.node_mut(child)?.parent = None;

        if let [only] = remaining.as_slice() {
            let only = *only;
            self.replace_in_parent(parent, only);
            self.nodes.remove(&parent);
            return Ok(Detached {
                parent,
                promoted: Some(only),
            });
        }
        Ok(Detached {
            parent,
            promoted: None,
        })
    }

    /// Drop a detached leaf from the arena and hand back its pane.
    pub(crate) fn remove_leaf(&mut self, leaf: NodeId) -> Option<Pane> {
        let node = self.nodes.remove(&leaf)?;
        match node.kind {
            NodeKind::Leaf(pane) => {
                self.index.remove(&pane.id);
                Some(pane)
            }
            other => {
                self.nodes.insert(
                    leaf,
                    PaneNode {
                        id: leaf,
                        parent: node.parent,
                        kind: other,
                    },
                );
                None
            }
        }
    }

    /// Drop a detached subtree from the arena, returning its panes in
    /// depth-first order.
    pub(crate) fn remove_subtree(&mut self, id: NodeId) -> Vec<Pane> {
        let mut panes = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let Some(node) = self.nodes.remove(&current) else {
                continue;
            };
            match node.kind {
                NodeKind::Leaf(pane) => {
                    self.index.remove(&pane.id);
                    panes.push(pane);
                }
                NodeKind::Split { children, .. } | NodeKind::Stack { children, .. } => {
                    pending.extend(children.into_iter().rev());
                }
            }
        }
        panes
    }

    /// Exchange the positions of two panes. Node identities stay put; the
    /// panes move between them.
    pub fn swap_panes(&mut self, a: &PaneId, b: &PaneId) -> Result<(), TilingError> {
        let na = self.node_of(a).ok_or_else(|| TilingError::PaneNotFound(a.clone()))?;
        let nb = self.node_of(b).ok_or_else(|| TilingError::PaneNotFound(b.clone()))?;
        if na == nb {
            return Ok(());
        }
        let pa = self.take_pane(na)?;
        let pb = self.take_pane(nb)?;
        self.index.insert(pb.id.clone(), na);
        self.index.insert(pa.id.clone(), nb);
        self.node_mut(na)?.kind = NodeKind::Leaf(pb);
        self.node_mut(nb)?.kind = NodeKind::Leaf(pa);
        Ok(())
    }

    fn take_pane(&mut self, leaf: NodeId) -> Result<Pane, TilingError> {
        match &self.node_mut(leaf)?.kind {
            NodeKind::Leaf(pane) => Ok(pane.clone()),
            _ => Err(TilingError::NotALeaf(leaf)),
        }
    }

    /// Set a split's divider. `ratio` is stored as given.
    pub(crate) fn set_ratio(&mut self, split: NodeId, value: f64) -> Result<(), TilingError> {
        match &mut self.node_mut(split)?.kind {
            NodeKind::Split { ratio, .. } => {
                *ratio = value;
                Ok(())
            }
            _ => Err(TilingError::NotASplit(split)),
        }
    }
}
