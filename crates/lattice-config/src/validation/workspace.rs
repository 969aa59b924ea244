//! Workspace tiling validation (resize step, minimum pane share, gap).

use crate::schema::LatticeConfig;

use super::helpers::{validate_range, validate_range_f64, validate_range_open_min};

pub(crate) fn validate_workspace(errors: &mut Vec<String>, config: &LatticeConfig) {
    let ws = &config.workspace;
    validate_range_open_min(
        errors,
        "workspace.resize_step_percent",
        ws.resize_step_percent,
        0.0,
        50.0,
    );
    validate_range_f64(
        errors,
        "workspace.min_pane_percent",
        ws.min_pane_percent,
        1.0,
        45.0,
    );
    validate_range(errors, "workspace.layout.gap", ws.layout.gap, 0, 40);
    if ws.new_pane_url.trim().is_empty() {
        errors.push("workspace.new_pane_url must not be empty".into());
    }
}
