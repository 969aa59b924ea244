//! Tiling workspace configuration types.

use serde::{Deserialize, Serialize};

use super::FloatingPaneConfig;

/// Behavior of the per-tab pane tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// URI given to panes created by split and add-to-stack.
    pub new_pane_url: String,
    /// Divider movement per keyboard resize step, in percent (valid range: (0, 50]).
    pub resize_step_percent: f64,
    /// Smallest share either side of a split may shrink to, in percent (valid range: 1-45).
    pub min_pane_percent: f64,
    pub layout: LayoutConfig,
    pub floating_pane: FloatingPaneConfig,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            new_pane_url: "about:blank".into(),
            resize_step_percent: 5.0,
            min_pane_percent: 10.0,
            layout: LayoutConfig::default(),
            floating_pane: FloatingPaneConfig::default(),
        }
    }
}

/// Geometry used by the headless layout engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between split children in pixels (valid range: 0-40).
    pub gap: u32,
}
