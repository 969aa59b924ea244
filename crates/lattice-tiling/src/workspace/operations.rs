//! Split, close, resize, swap, and consume/expel operations on Workspace.

use lattice_common::{Direction, PaneId};

use super::{CloseOutcome, ConsumeOutcome, ResizeOutcome, SplitOutcome, TreeDelta, Workspace};
use crate::error::TilingError;
use crate::pane::Pane;
use crate::tree::{NodeId, NodeKind};

impl Workspace {
    /// Split `target`, placing a fresh blank pane on the `direction` side.
    /// The new pane becomes active.
    pub fn split(&mut self, target: &PaneId, direction: Direction) -> Result<SplitOutcome, TilingError> {
        let pane = self.new_pane();
        self.split_with(target, direction, pane)
    }

    /// Split `target` with a caller-supplied pane (one whose content was
    /// already acquired). A target inside a stack splits around the stack.
    pub fn split_with(
        &mut self,
        target: &PaneId,
        direction: Direction,
        pane: Pane,
    ) -> Result<SplitOutcome, TilingError> {
        let leaf = self.require_leaf(target)?;
        let anchor = self.tree.stack_of(target).unwrap_or(leaf);
        let new_pane = pane.id.clone();

        let (split, _) = self.tree.wrap_in_split(
            anchor,
            pane,
            direction.orientation(),
            !direction.is_forward(),
        )?;
        self.active = new_pane.clone();

        tracing::info!(
            target = %target,
            new_pane = %new_pane,
            split = %split,
            direction = ?direction,
            "pane split"
        );
        Ok(SplitOutcome {
            new_pane,
            delta: TreeDelta::Restructured,
        })
    }

    /// Remove `target` from the tree.
    ///
    /// A parent left with one child collapses into it. Closing the last
    /// pane of the tab is refused with [`CloseOutcome::LastPane`].
    pub fn close(&mut self, target: &PaneId) -> Result<CloseOutcome, TilingError> {
        let leaf = self.require_leaf(target)?;
        if self.tree.pane_count() <= 1 {
            tracing::debug!(pane_id = %target, "refusing to close last pane");
            return Ok(CloseOutcome::LastPane);
        }

        // Single-child wrappers go with the leaf.
        let mut victim = leaf;
        while let Some(parent) = self.tree.parent_of(victim) {
            match self.tree.node(parent) {
                Some(node) if node.children().len() == 1 => victim = parent,
                _ => break,
            }
        }
        let stack = self.tree.stack_of(target).filter(|_| victim == leaf);
        let index = self.tree.index_in_parent(victim).unwrap_or(0);

        let detached = self.tree.detach(victim)?;
        let pane = self
            .tree
            .remove_subtree(victim)
            .into_iter()
            .next()
            .ok_or(TilingError::NotALeaf(leaf))?;

        let delta = match (stack, detached.promoted) {
            (Some(stack), None) => TreeDelta::StackMemberRemoved {
                stack,
                pane: pane.id.clone(),
            },
            _ => TreeDelta::Restructured,
        };

        if &self.active == target {
            self.active = self
                .successor(detached.parent, detached.promoted, index)
                .or_else(|| self.tree.first_leaf(self.tree.root(), false))
                .ok_or_else(|| TilingError::InvalidTree("tree has no panes".into()))?;
        }

        tracing::info!(
            pane_id = %target,
            next_active = %self.active,
            remaining = self.tree.pane_count(),
            "pane closed"
        );
        Ok(CloseOutcome::Closed {
            pane,
            next_active: self.active.clone(),
            delta,
        })
    }

    /// The pane to activate after removing the child at `index` of `parent`.
    fn successor(&self, parent: NodeId, promoted: Option<NodeId>, index: usize) -> Option<PaneId> {
        if let Some(promoted) = promoted {
            return self.tree.first_leaf(promoted, false);
        }
        let node = self.tree.node(parent)?;
        match node.kind() {
            NodeKind::Stack { .. } => self.tree.first_leaf(parent, false),
            _ => {
                let children = node.children();
                let next = children.get(index.min(children.len().saturating_sub(1)))?;
                self.tree.first_leaf(*next, false)
            }
        }
    }

    /// Move the divider of the nearest split on `direction`'s axis by
    /// `steps` resize steps. Forward directions grow the first child.
    pub fn resize(
        &mut self,
        pane_id: &PaneId,
        direction: Direction,
        steps: i32,
    ) -> Result<ResizeOutcome, TilingError> {
        let leaf = self.require_leaf(pane_id)?;
        let anchor = self.tree.stack_of(pane_id).unwrap_or(leaf);
        let Some(split) = self.tree.nearest_split_on_axis(anchor, direction.orientation()) else {
            tracing::debug!(pane_id = %pane_id, direction = ?direction, "no split to resize");
            return Ok(ResizeOutcome::NothingToResize);
        };
        let current = match self.tree.node(split).map(|n| n.kind()) {
            Some(NodeKind::Split { ratio, .. }) => *ratio,
            _ => return Err(TilingError::NotASplit(split)),
        };

        let sign = if direction.is_forward() { 1.0 } else { -1.0 };
        let delta = sign * f64::from(steps) * self.settings.resize_step_percent / 100.0;
        let ratio = self.clamp_ratio(current + delta);
        self.tree.set_ratio(split, ratio)?;

        tracing::info!(pane_id = %pane_id, split = %split, ratio, "split resized");
        Ok(ResizeOutcome::Resized { split, ratio })
    }

    /// Set a split's divider directly (e.g. from a drag). Returns the
    /// stored ratio after clamping.
    pub fn set_split_ratio(&mut self, split: NodeId, ratio: f64) -> Result<f64, TilingError> {
        if !ratio.is_finite() {
            return Err(TilingError::InvalidTree(format!("ratio {ratio} for {split}")));
        }
        let ratio = self.clamp_ratio(ratio);
        self.tree.set_ratio(split, ratio)?;
        Ok(ratio)
    }

    fn clamp_ratio(&self, ratio: f64) -> f64 {
        let min = self.settings.min_pane_percent / 100.0;
        let clamped = ratio.clamp(min, 1.0 - min);
        (clamped * 100.0).round() / 100.0
    }

    /// Swap `pane_id` with its structural neighbor in `direction`. The pane
    /// keeps focus at its new position. Returns the neighbor it swapped with.
    pub fn swap(&mut self, pane_id: &PaneId, direction: Direction) -> Result<Option<PaneId>, TilingError> {
        self.require_leaf(pane_id)?;
        let Some(other) = self.tree.adjacent_pane(pane_id, direction) else {
            return Ok(None);
        };
        self.tree.swap_panes(pane_id, &other)?;
        tracing::info!(pane_id = %pane_id, other = %other, direction = ?direction, "panes swapped");
        Ok(Some(other))
    }

    /// Move a stacked pane out beside its stack, or fold a pane into the
    /// neighboring stack (or leaf, which becomes a stack) in `direction`.
    pub fn consume_or_expel(
        &mut self,
        pane_id: &PaneId,
        direction: Direction,
    ) -> Result<ConsumeOutcome, TilingError> {
        let leaf = self.require_leaf(pane_id)?;
        match self.tree.stack_of(pane_id) {
            Some(stack) => self.expel(pane_id, leaf, stack, direction),
            None => self.consume(pane_id, leaf, direction),
        }
    }

    fn expel(
        &mut self,
        pane_id: &PaneId,
        leaf: NodeId,
        stack: NodeId,
        direction: Direction,
    ) -> Result<ConsumeOutcome, TilingError> {
        if self.tree.stack(stack).map_or(0, |s| s.len()) < 2 {
            return Ok(ConsumeOutcome::Nothing);
        }
        let detached = self.tree.detach(leaf)?;
        let pane = self.tree.remove_leaf(leaf).ok_or(TilingError::NotALeaf(leaf))?;
        let anchor = detached.promoted.unwrap_or(stack);
        self.tree
            .wrap_in_split(anchor, pane, direction.orientation(), !direction.is_forward())?;
        self.active = pane_id.clone();

        tracing::info!(pane_id = %pane_id, direction = ?direction, "pane expelled from stack");
        Ok(ConsumeOutcome::Expelled {
            delta: TreeDelta::Restructured,
        })
    }

    fn consume(
        &mut self,
        pane_id: &PaneId,
        leaf: NodeId,
        direction: Direction,
    ) -> Result<ConsumeOutcome, TilingError> {
        let Some((sibling, _)) = self.tree.adjacent_sibling(leaf, direction) else {
            return Ok(ConsumeOutcome::Nothing);
        };
        let Some(host) = self.tree.first_leaf(sibling, !direction.is_forward()) else {
            return Ok(ConsumeOutcome::Nothing);
        };
        let host_stack = self.tree.stack_of(&host);
        let host_leaf = self.require_leaf(&host)?;

        self.tree.detach(leaf)?;
        let pane = self.tree.remove_leaf(leaf).ok_or(TilingError::NotALeaf(leaf))?;
        let stack = match host_stack {
            Some(stack) => stack,
            None => self.tree.wrap_in_stack(host_leaf)?,
        };
        self.tree.push_to_stack(stack, pane)?;
        self.active = pane_id.clone();

        tracing::info!(pane_id = %pane_id, host = %host, stack = %stack, "pane consumed into stack");
        Ok(ConsumeOutcome::Consumed {
            stack,
            delta: TreeDelta::Restructured,
        })
    }
}
