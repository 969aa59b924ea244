//! Focus changes and directional navigation for Workspace.

use lattice_common::{Direction, PaneId, StackStep};

use super::{NavOutcome, StackMove, TreeDelta, Workspace};
use crate::error::TilingError;
use crate::navigation::{find_neighbor, PaneRect};

impl Workspace {
    /// Make `pane_id` active, revealing it if it is a hidden stack member.
    pub fn focus(&mut self, pane_id: &PaneId) -> Result<TreeDelta, TilingError> {
        self.require_leaf(pane_id)?;
        let delta = match self.tree.reveal_in_stack(pane_id)? {
            Some((stack, index)) => TreeDelta::StackActiveChanged { stack, index },
            None => TreeDelta::Unchanged,
        };
        self.active = pane_id.clone();
        Ok(delta)
    }

    /// Cycle to the next visible pane in tree order.
    pub fn focus_next(&mut self) -> Option<PaneId> {
        let next = self.tree.next_pane(&self.active)?;
        self.active = next.clone();
        Some(next)
    }

    /// Cycle to the previous visible pane in tree order.
    pub fn focus_prev(&mut self) -> Option<PaneId> {
        let prev = self.tree.prev_pane(&self.active)?;
        self.active = prev.clone();
        Some(prev)
    }

    /// Directional focus from on-screen geometry.
    ///
    /// Up/down inside a stack moves within the stack first; only at its
    /// edge does the search escape to neighboring rects.
    pub fn navigate(&mut self, direction: Direction, rects: &[PaneRect]) -> Result<NavOutcome, TilingError> {
        if let Some(moved) = self.try_stack_step(direction)? {
            return Ok(moved);
        }
        let Some(target) = find_neighbor(&self.active, rects, direction) else {
            tracing::debug!(active = %self.active, direction = ?direction, "no neighbor");
            return Ok(NavOutcome::NoTarget);
        };
        if !self.tree.contains_pane(&target) {
            tracing::warn!(target = %target, "geometry reported a pane outside the tree");
            return Ok(NavOutcome::NoTarget);
        }
        let delta = self.focus(&target)?;
        Ok(NavOutcome::Moved { pane: target, delta })
    }

    /// Directional focus from tree structure alone, for when nothing has
    /// been laid out yet.
    pub fn navigate_structural(&mut self, direction: Direction) -> Result<NavOutcome, TilingError> {
        if let Some(moved) = self.try_stack_step(direction)? {
            return Ok(moved);
        }
        let Some(target) = self.tree.adjacent_pane(&self.active, direction) else {
            return Ok(NavOutcome::NoTarget);
        };
        let delta = self.focus(&target)?;
        Ok(NavOutcome::Moved { pane: target, delta })
    }

    fn try_stack_step(&mut self, direction: Direction) -> Result<Option<NavOutcome>, TilingError> {
        let step = match direction {
            Direction::Up => StackStep::Up,
            Direction::Down => StackStep::Down,
            Direction::Left | Direction::Right => return Ok(None),
        };
        if self.tree.stack_of(&self.active).is_none() {
            return Ok(None);
        }
        let active = self.active.clone();
        Ok(match self.navigate_stack(&active, step)? {
            StackMove::Moved { pane, delta, .. } => Some(NavOutcome::Moved { pane, delta }),
            StackMove::AtBoundary => None,
        })
    }
}
