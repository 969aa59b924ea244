//! Layout engine types and configuration.

use std::collections::HashMap;

use lattice_common::{PaneId, Rect, WidgetHandle};

use crate::navigation::GeometryProvider;

/// Computes pane rectangles from a tree without a widget toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between siblings of a split.
    pub gap: u32,
    /// Outer padding in pixels around the entire tiling area.
    pub outer_padding: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 0,
            outer_padding: 0,
        }
    }
}

impl LayoutEngine {
    pub fn new(gap: u32) -> Self {
        Self {
            gap,
            ..Self::default()
        }
    }
}

/// Result of one layout pass: rects for every visible pane, with stacked
/// panes reported through their stack container.
///
/// Widget handles here are synthetic, minted per pass.
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    pub(super) visible: Vec<PaneId>,
    pub(super) leaves: HashMap<PaneId, WidgetHandle>,
    pub(super) stacks: HashMap<PaneId, WidgetHandle>,
    pub(super) bounds: HashMap<WidgetHandle, Rect>,
    pub(super) next_handle: u64,
}

impl LayoutSnapshot {
    pub(super) fn mint(&mut self, rect: Rect) -> WidgetHandle {
        let handle = WidgetHandle(self.next_handle);
        self.next_handle += 1;
        self.bounds.insert(handle, rect);
        handle
    }

    /// Rect of a visible pane's own widget.
    pub fn rect_of(&self, pane_id: &PaneId) -> Option<Rect> {
        let handle = self.leaves.get(pane_id)?;
        self.bounds.get(handle).copied()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl GeometryProvider for LayoutSnapshot {
    fn list_visible_pane_ids(&self) -> Vec<PaneId> {
        self.visible.clone()
    }

    fn widget_for(&self, pane_id: &PaneId) -> Option<WidgetHandle> {
        self.leaves.get(pane_id).copied()
    }

    fn stack_container_for(&self, pane_id: &PaneId) -> Option<WidgetHandle> {
        self.stacks.get(pane_id).copied()
    }

    fn bounds_of(&self, widget: WidgetHandle) -> Option<Rect> {
        self.bounds.get(&widget).copied()
    }
}
