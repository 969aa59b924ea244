use lattice_common::{PaneId, Rect, WidgetHandle};
use serde::{Deserialize, Serialize};

/// On-screen bounding box of a visible pane, relative to the tab view.
/// Recomputed for every navigation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneRect {
    pub pane_id: PaneId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PaneRect {
    pub fn new(pane_id: PaneId, rect: Rect) -> Self {
        Self {
            pane_id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// What the view layer exposes for geometric navigation.
pub trait GeometryProvider {
    /// Panes currently on screen; a stack lists only its active member.
    fn list_visible_pane_ids(&self) -> Vec<PaneId>;

    fn widget_for(&self, pane_id: &PaneId) -> Option<WidgetHandle>;

    /// The container widget of the stack holding `pane_id`, if stacked.
    fn stack_container_for(&self, pane_id: &PaneId) -> Option<WidgetHandle>;

    /// Bounds of `widget` relative to the tab view. `None` before layout.
    fn bounds_of(&self, widget: WidgetHandle) -> Option<Rect>;

    /// Rects for every visible pane that has been laid out. Stacked panes
    /// report their container's rect.
    fn pane_rects(&self) -> Vec<PaneRect> {
        self.list_visible_pane_ids()
            .into_iter()
            .filter_map(|pane_id| {
                let widget = self
                    .stack_container_for(&pane_id)
                    .or_else(|| self.widget_for(&pane_id))?;
                let rect = self.bounds_of(widget)?;
                (rect.width > 0.0 && rect.height > 0.0).then(|| PaneRect::new(pane_id, rect))
            })
            .collect()
    }
}
