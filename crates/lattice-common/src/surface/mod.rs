//! Boundary traits for the collaborators the layout core drives: the
//! browsing-engine content pool and the widget toolkit.
//!
//! Handles are opaque numbers minted by the implementation. Everything here
//! is called from the UI loop only, hence `&mut self` and no `Send` bound.

mod headless;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;
use crate::types::{Orientation, PaneId, Size};

pub use headless::{HeadlessContent, HeadlessWidget, HeadlessWidgets};

/// A browsing-engine content surface (one web view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceHandle(pub u64);

/// A node in the rendered widget graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetHandle(pub u64);

/// A per-frame callback registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TickId(pub u64);

/// What a per-frame callback wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Break,
}

/// Primitive containers the widget sync layer and floating overlays build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Two or more children laid out along an axis.
    Split(Orientation),
    /// Overlapping children, one presented at a time.
    Stack,
    /// A titled frame wrapping one content widget.
    Titled,
    /// Root of a tab's view; floating overlays are layered on top of it.
    Overlay,
}

/// The shared browsing-engine pool.
pub trait ContentProvider {
    /// Get (or create) the content surface backing `pane_id`.
    fn acquire(&mut self, pane_id: &PaneId) -> Result<SurfaceHandle, ContentError>;

    /// Return the surface backing `pane_id` to the pool. Unknown ids are ignored.
    fn release(&mut self, pane_id: &PaneId);

    fn wrap_as_widget(&mut self, surface: SurfaceHandle) -> Result<WidgetHandle, ContentError>;

    fn navigate(&mut self, surface: SurfaceHandle, url: &str) -> Result<(), ContentError>;
}

/// The widget toolkit, as seen by the layout core.
pub trait WidgetFactory {
    fn create_container(&mut self, kind: ContainerKind, title: &str) -> WidgetHandle;

    fn append_child(&mut self, parent: WidgetHandle, child: WidgetHandle);

    fn remove_child(&mut self, parent: WidgetHandle, child: WidgetHandle);

    fn add_overlay_child(&mut self, overlay: WidgetHandle, child: WidgetHandle);

    fn remove_overlay_child(&mut self, overlay: WidgetHandle, child: WidgetHandle);

    /// Toggle the "visible" presentation state. The widget stays mapped
    /// either way so its content surface keeps its rendered frame.
    fn set_presented(&mut self, widget: WidgetHandle, presented: bool);

    fn set_size_request(&mut self, widget: WidgetHandle, size: Size);

    /// Current allocation; `Size::ZERO` before the first layout pass.
    fn allocated_size(&self, widget: WidgetHandle) -> Size;

    /// Position of `widget` relative to `ancestor`, if it is a descendant.
    fn relative_position(&self, widget: WidgetHandle, ancestor: WidgetHandle) -> Option<(f64, f64)>;

    /// Register a render-tick callback on `widget`'s frame clock.
    fn add_tick_callback(&mut self, widget: WidgetHandle) -> TickId;

    fn remove_tick_callback(&mut self, tick: TickId);

    /// Drop a container created by `create_container`.
    fn destroy(&mut self, widget: WidgetHandle);
}
