use lattice_common::{PaneId, Rect, WidgetFactory, WidgetHandle};

use super::WidgetSync;
use crate::navigation::GeometryProvider;
use crate::tree::PaneTree;

/// Reads pane geometry from the live widget graph of one tab.
pub struct SyncedGeometry<'a> {
    sync: &'a WidgetSync,
    tree: &'a PaneTree,
    widgets: &'a dyn WidgetFactory,
}

impl WidgetSync {
    pub fn geometry<'a>(&'a self, tree: &'a PaneTree, widgets: &'a dyn WidgetFactory) -> SyncedGeometry<'a> {
        SyncedGeometry {
            sync: self,
            tree,
            widgets,
        }
    }
}

impl GeometryProvider for SyncedGeometry<'_> {
    fn list_visible_pane_ids(&self) -> Vec<PaneId> {
        self.tree.visible_pane_ids()
    }

    fn widget_for(&self, pane_id: &PaneId) -> Option<WidgetHandle> {
        self.sync.frame_for(pane_id)
    }

    fn stack_container_for(&self, pane_id: &PaneId) -> Option<WidgetHandle> {
        self.sync.container_for(self.tree.stack_of(pane_id)?)
    }

    fn bounds_of(&self, widget: WidgetHandle) -> Option<Rect> {
        let (x, y) = self.widgets.relative_position(widget, self.sync.root())?;
        let size = self.widgets.allocated_size(widget);
        Some(Rect::new(x, y, f64::from(size.width), f64::from(size.height)))
    }
}
