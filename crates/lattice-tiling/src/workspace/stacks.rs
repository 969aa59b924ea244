//! Stack operations on Workspace: add-to-stack and linear stack movement.

use lattice_common::{PaneId, StackStep};

use super::{StackMove, StackOutcome, TreeDelta, Workspace};
use crate::error::TilingError;
use crate::pane::Pane;

impl Workspace {
    /// Stack a fresh blank pane on top of `target`.
    pub fn add_to_stack(&mut self, target: &PaneId) -> Result<StackOutcome, TilingError> {
        let pane = self.new_pane();
        self.add_to_stack_with(target, pane)
    }

    /// Stack `pane` with `target`. A target outside any stack is first
    /// wrapped in a new stack in its own tree position. The new pane is
    /// appended last and becomes active.
    pub fn add_to_stack_with(&mut self, target: &PaneId, pane: Pane) -> Result<StackOutcome, TilingError> {
        let leaf = self.require_leaf(target)?;
        if self.tree.contains_pane(&pane.id) {
            return Err(TilingError::DuplicatePane(pane.id));
        }
        let new_pane = pane.id.clone();

        let (stack, created) = match self.tree.stack_of(target) {
            Some(stack) => (stack, false),
            None => (self.tree.wrap_in_stack(leaf)?, true),
        };
        let (_, index) = self.tree.push_to_stack(stack, pane)?;
        self.active = new_pane.clone();

        tracing::info!(
            target = %target,
            new_pane = %new_pane,
            stack = %stack,
            index,
            created,
            "pane stacked"
        );
        let delta = if created {
            TreeDelta::Restructured
        } else {
            TreeDelta::StackMemberAdded {
                stack,
                pane: new_pane.clone(),
                index,
            }
        };
        Ok(StackOutcome {
            new_pane,
            stack,
            index,
            delta,
        })
    }

    /// Move one member up or down within `current`'s stack, clamped at the
    /// ends. The newly visible member becomes active.
    pub fn navigate_stack(&mut self, current: &PaneId, step: StackStep) -> Result<StackMove, TilingError> {
        self.require_leaf(current)?;
        let stack = self
            .tree
            .stack_of(current)
            .ok_or_else(|| TilingError::NotInStack(current.clone()))?;

        let Some(index) = self.tree.step_stack(stack, step)? else {
            tracing::debug!(pane_id = %current, step = ?step, "stack boundary");
            return Ok(StackMove::AtBoundary);
        };
        let pane = self
            .tree
            .stack(stack)
            .and_then(|view| view.active_pane())
            .ok_or_else(|| TilingError::InvalidTree(format!("empty stack {stack}")))?;
        self.active = pane.clone();

        tracing::debug!(pane_id = %pane, stack = %stack, index, "stack member activated");
        Ok(StackMove::Moved {
            pane,
            index,
            delta: TreeDelta::StackActiveChanged { stack, index },
        })
    }
}
