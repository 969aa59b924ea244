//! Core types and constructors for Workspace.

use lattice_common::{new_pane_id, PaneId};
use serde::{Deserialize, Serialize};

use crate::error::TilingError;
use crate::pane::{Pane, BLANK_URI};
use crate::tree::{NodeId, PaneTree};

/// Tunables for tree mutations, filled from the `[workspace]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    /// URI given to panes created by split and add-to-stack.
    pub new_pane_url: String,
    /// Divider movement per resize step, in percent of the split.
    pub resize_step_percent: f64,
    /// Smallest share either side of a split may shrink to, in percent.
    pub min_pane_percent: f64,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            new_pane_url: BLANK_URI.into(),
            resize_step_percent: 5.0,
            min_pane_percent: 10.0,
        }
    }
}

/// The pane tree of one tab plus the single active pane.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub(super) tree: PaneTree,
    pub(super) active: PaneId,
    pub(super) settings: WorkspaceSettings,
}

impl Workspace {
    /// A workspace holding `pane` as its only (and active) pane.
    pub fn new(pane: Pane, settings: WorkspaceSettings) -> Self {
        let active = pane.id.clone();
        Self {
            tree: PaneTree::new(pane),
            active,
            settings,
        }
    }

    /// A workspace with one fresh pane at `settings.new_pane_url`.
    pub fn with_settings(settings: WorkspaceSettings) -> Self {
        let pane = Pane::new(new_pane_id(), settings.new_pane_url.clone());
        Self::new(pane, settings)
    }

    /// Adopt an existing tree, e.g. one restored from a snapshot.
    pub fn from_tree(
        tree: PaneTree,
        active: PaneId,
        settings: WorkspaceSettings,
    ) -> Result<Self, TilingError> {
        if !tree.contains_pane(&active) {
            return Err(TilingError::PaneNotFound(active));
        }
        let ws = Self {
            tree,
            active,
            settings,
        };
        ws.validate()?;
        Ok(ws)
    }

    // -- Accessors --

    pub fn tree(&self) -> &PaneTree {
        &self.tree
    }

    pub fn active_pane(&self) -> &PaneId {
        &self.active
    }

    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }

    pub fn pane_count(&self) -> usize {
        self.tree.pane_count()
    }

    /// A blank pane for split and add-to-stack. Not yet in the tree.
    pub fn new_pane(&self) -> Pane {
        Pane::new(new_pane_id(), self.settings.new_pane_url.clone())
    }

    /// Record what the browsing engine reported for a pane.
    pub fn update_pane(
        &mut self,
        pane_id: &PaneId,
        uri: impl Into<String>,
        title: Option<String>,
    ) -> Result<(), TilingError> {
        let pane = self
            .tree
            .pane_mut(pane_id)
            .ok_or_else(|| TilingError::PaneNotFound(pane_id.clone()))?;
        pane.uri = uri.into();
        if let Some(title) = title {
            pane.title = title;
        }
        Ok(())
    }

    /// Full structural check plus the active-pane invariant.
    pub fn validate(&self) -> Result<(), TilingError> {
        self.tree.validate()?;
        if !self.tree.contains_pane(&self.active) {
            return Err(TilingError::InvalidTree(format!(
                "active pane {} not in tree",
                self.active
            )));
        }
        Ok(())
    }

    pub(super) fn require_leaf(&self, pane_id: &PaneId) -> Result<NodeId, TilingError> {
        self.tree
            .node_of(pane_id)
            .ok_or_else(|| TilingError::PaneNotFound(pane_id.clone()))
    }
}

/// How a mutation changed the tree, so the widget layer can pick the
/// cheapest way to catch up.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeDelta {
    /// Nothing structural moved (focus inside the same visible set).
    Unchanged,
    /// Shape changed; rebuild the widget graph.
    Restructured,
    StackMemberAdded {
        stack: NodeId,
        pane: PaneId,
        index: usize,
    },
    StackMemberRemoved {
        stack: NodeId,
        pane: PaneId,
    },
    StackActiveChanged {
        stack: NodeId,
        index: usize,
    },
    RatioChanged {
        split: NodeId,
        ratio: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    pub new_pane: PaneId,
    pub delta: TreeDelta,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    Closed {
        pane: Pane,
        next_active: PaneId,
        delta: TreeDelta,
    },
    /// The pane is the last one in the tab; close the tab instead.
    LastPane,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackOutcome {
    pub new_pane: PaneId,
    pub stack: NodeId,
    pub index: usize,
    pub delta: TreeDelta,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StackMove {
    Moved {
        pane: PaneId,
        index: usize,
        delta: TreeDelta,
    },
    /// Already at the first (up) or last (down) member.
    AtBoundary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    Moved { pane: PaneId, delta: TreeDelta },
    NoTarget,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    Resized { split: NodeId, ratio: f64 },
    NothingToResize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsumeOutcome {
    /// The pane joined the stack next to it.
    Consumed { stack: NodeId, delta: TreeDelta },
    /// The pane left its stack and now sits beside it.
    Expelled { delta: TreeDelta },
    Nothing,
}
