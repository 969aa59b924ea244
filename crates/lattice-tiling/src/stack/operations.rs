//! Stack mutations on the pane tree: push, activate, step.

use lattice_common::{PaneId, StackStep};

use super::StackView;
use crate::error::TilingError;
use crate::pane::Pane;
use crate::tree::{NodeId, NodeKind, PaneTree};

impl PaneTree {
    pub fn stack(&self, id: NodeId) -> Option<StackView<'_>> {
        StackView::new(self, id)
    }

    /// Append a new leaf for `pane` to the end of `stack` and make it active.
    /// Returns the new leaf and its index.
    pub(crate) fn push_to_stack(
        &mut self,
        stack: NodeId,
        pane: Pane,
    ) -> Result<(NodeId, usize), TilingError> {
        if self.contains_pane(&pane.id) {
            return Err(TilingError::DuplicatePane(pane.id));
        }
        if !self.node(stack).is_some_and(|n| n.is_stacked()) {
            return Err(TilingError::InvalidTree(format!("{stack} is not a stack")));
        }
        let leaf = self.alloc(Some(stack), NodeKind::Leaf(pane));
        let node = self.node_mut(stack)?;
        match &mut node.kind {
            NodeKind::Stack { children, active } => {
                children.push(leaf);
                *active = children.len() - 1;
                Ok((leaf, *active))
            }
            _ => Err(TilingError::InvalidTree(format!("{stack} is not a stack"))),
        }
    }

    pub(crate) fn set_stack_active(&mut self, stack: NodeId, index: usize) -> Result<(), TilingError> {
        match &mut self.node_mut(stack)?.kind {
            NodeKind::Stack { children, active } if index < children.len() => {
                *active = index;
                Ok(())
            }
            NodeKind::Stack { children, .. } => Err(TilingError::InvalidTree(format!(
                "stack index {index} out of {}",
                children.len()
            ))),
            _ => Err(TilingError::InvalidTree(format!("{stack} is not a stack"))),
        }
    }

    /// Move `stack`'s active index one step without wrapping. Returns the
    /// new index, or `None` when already at that edge.
    pub(crate) fn step_stack(&mut self, stack: NodeId, step: StackStep) -> Result<Option<usize>, TilingError> {
        let view = self
            .stack(stack)
            .ok_or_else(|| TilingError::InvalidTree(format!("{stack} is not a stack")))?;
        let current = view.active_index();
        let target = match step {
            StackStep::Up => current.checked_sub(1),
            StackStep::Down => Some(current + 1).filter(|i| *i < view.len()),
        };
        if let Some(index) = target {
            self.set_stack_active(stack, index)?;
        }
        Ok(target)
    }

    /// Make the stack member holding `pane_id` the visible one. Returns the
    /// stack and new index when something changed.
    pub(crate) fn reveal_in_stack(&mut self, pane_id: &PaneId) -> Result<Option<(NodeId, usize)>, TilingError> {
        let Some(stack) = self.stack_of(pane_id) else {
            return Ok(None);
        };
        let Some(view) = self.stack(stack) else {
            return Ok(None);
        };
        let Some(index) = view.position_of(pane_id) else {
            return Err(TilingError::PaneNotFound(pane_id.clone()));
        };
        if index == view.active_index() {
            return Ok(None);
        }
        self.set_stack_active(stack, index)?;
        Ok(Some((stack, index)))
    }
}
