//! In-memory collaborators.
//!
//! Used by the headless script driver and as test doubles. They record
//! enough state (URLs, presentation flags, size requests, tick
//! registrations) for callers to assert on.

use std::collections::{BTreeMap, HashMap};

use crate::errors::ContentError;
use crate::types::{PaneId, Size};

use super::{ContainerKind, ContentProvider, SurfaceHandle, TickId, WidgetFactory, WidgetHandle};

const CONTENT_WIDGET_BASE: u64 = 1 << 40;

#[derive(Debug, Default)]
pub struct HeadlessContent {
    surfaces: HashMap<PaneId, SurfaceHandle>,
    urls: HashMap<SurfaceHandle, String>,
    widgets: HashMap<SurfaceHandle, WidgetHandle>,
    next_surface: u64,
    next_widget: u64,
    pending_acquire_failure: Option<String>,
    navigation_failing: bool,
    navigations: Vec<(SurfaceHandle, String)>,
    released: Vec<PaneId>,
}

impl HeadlessContent {
    pub fn new() -> Self {
        Self {
            next_surface: 1,
            next_widget: CONTENT_WIDGET_BASE,
            ..Self::default()
        }
    }

    pub fn surface_for(&self, pane_id: &PaneId) -> Option<SurfaceHandle> {
        self.surfaces.get(pane_id).copied()
    }

    pub fn url_of(&self, surface: SurfaceHandle) -> Option<&str> {
        self.urls.get(&surface).map(String::as_str)
    }

    /// Simulate the user following a link inside the page.
    pub fn set_current_url(&mut self, surface: SurfaceHandle, url: impl Into<String>) {
        self.urls.insert(surface, url.into());
    }

    /// Every successful `navigate` call, in order.
    pub fn navigations(&self) -> &[(SurfaceHandle, String)] {
        &self.navigations
    }

    pub fn released(&self) -> &[PaneId] {
        &self.released
    }

    pub fn live_surfaces(&self) -> usize {
        self.surfaces.len()
    }

    pub fn fail_next_acquire(&mut self, reason: impl Into<String>) {
        self.pending_acquire_failure = Some(reason.into());
    }

    pub fn set_navigation_failing(&mut self, failing: bool) {
        self.navigation_failing = failing;
    }
}

impl ContentProvider for HeadlessContent {
    fn acquire(&mut self, pane_id: &PaneId) -> Result<SurfaceHandle, ContentError> {
        if let Some(reason) = self.pending_acquire_failure.take() {
            return Err(ContentError::AcquireFailed {
                pane_id: pane_id.clone(),
                reason,
            });
        }
        if let Some(surface) = self.surfaces.get(pane_id) {
            return Ok(*surface);
        }
        let surface = SurfaceHandle(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(pane_id.clone(), surface);
        Ok(surface)
    }

    fn release(&mut self, pane_id: &PaneId) {
        if let Some(surface) = self.surfaces.remove(pane_id) {
            self.urls.remove(&surface);
            self.widgets.remove(&surface);
            self.released.push(pane_id.clone());
        }
    }

    fn wrap_as_widget(&mut self, surface: SurfaceHandle) -> Result<WidgetHandle, ContentError> {
        if !self.surfaces.values().any(|s| *s == surface) {
            return Err(ContentError::UnknownSurface(surface.0));
        }
        if let Some(widget) = self.widgets.get(&surface) {
            return Ok(*widget);
        }
        let widget = WidgetHandle(self.next_widget);
        self.next_widget += 1;
        self.widgets.insert(surface, widget);
        Ok(widget)
    }

    fn navigate(&mut self, surface: SurfaceHandle, url: &str) -> Result<(), ContentError> {
        if self.navigation_failing {
            return Err(ContentError::NavigateFailed {
                url: url.to_string(),
                reason: "navigation disabled".into(),
            });
        }
        if !self.surfaces.values().any(|s| *s == surface) {
            return Err(ContentError::UnknownSurface(surface.0));
        }
        self.urls.insert(surface, url.to_string());
        self.navigations.push((surface, url.to_string()));
        Ok(())
    }
}

/// Recorded state of one headless widget.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWidget {
    pub kind: Option<ContainerKind>,
    pub title: String,
    pub parent: Option<WidgetHandle>,
    pub children: Vec<WidgetHandle>,
    pub overlays: Vec<WidgetHandle>,
    pub presented: bool,
    pub size_request: Size,
    pub allocation: Size,
    pub position: (f64, f64),
}

#[derive(Debug, Default)]
pub struct HeadlessWidgets {
    widgets: HashMap<WidgetHandle, HeadlessWidget>,
    ticks: BTreeMap<TickId, WidgetHandle>,
    next_widget: u64,
    next_tick: u64,
}

impl HeadlessWidgets {
    pub fn new() -> Self {
        Self {
            next_widget: 1,
            next_tick: 1,
            ..Self::default()
        }
    }

    pub fn widget(&self, handle: WidgetHandle) -> Option<&HeadlessWidget> {
        self.widgets.get(&handle)
    }

    pub fn is_presented(&self, handle: WidgetHandle) -> bool {
        self.widgets.get(&handle).is_some_and(|w| w.presented)
    }

    pub fn children(&self, handle: WidgetHandle) -> &[WidgetHandle] {
        self.widgets
            .get(&handle)
            .map(|w| w.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn overlays(&self, handle: WidgetHandle) -> &[WidgetHandle] {
        self.widgets
            .get(&handle)
            .map(|w| w.overlays.as_slice())
            .unwrap_or(&[])
    }

    /// Pretend the toolkit ran a layout pass.
    pub fn set_allocation(&mut self, handle: WidgetHandle, size: Size) {
        self.entry(handle).allocation = size;
    }

    pub fn set_position(&mut self, handle: WidgetHandle, x: f64, y: f64) {
        self.entry(handle).position = (x, y);
    }

    pub fn active_ticks(&self) -> Vec<TickId> {
        self.ticks.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn entry(&mut self, handle: WidgetHandle) -> &mut HeadlessWidget {
        self.widgets.entry(handle).or_default()
    }

    fn detach(&mut self, parent: WidgetHandle, child: WidgetHandle) {
        if let Some(p) = self.widgets.get_mut(&parent) {
            p.children.retain(|c| *c != child);
            p.overlays.retain(|c| *c != child);
        }
        if let Some(c) = self.widgets.get_mut(&child) {
            if c.parent == Some(parent) {
                c.parent = None;
            }
        }
    }
}

impl WidgetFactory for HeadlessWidgets {
    fn create_container(&mut self, kind: ContainerKind, title: &str) -> WidgetHandle {
        let handle = WidgetHandle(self.next_widget);
        self.next_widget += 1;
        self.widgets.insert(
            handle,
            HeadlessWidget {
                kind: Some(kind),
                title: title.to_string(),
                ..HeadlessWidget::default()
            },
        );
        handle
    }

    fn append_child(&mut self, parent: WidgetHandle, child: WidgetHandle) {
        if let Some(old) = self.widgets.get(&child).and_then(|c| c.parent) {
            self.detach(old, child);
        }
        self.entry(child).parent = Some(parent);
        self.entry(parent).children.push(child);
    }

    fn remove_child(&mut self, parent: WidgetHandle, child: WidgetHandle) {
        self.detach(parent, child);
    }

    fn add_overlay_child(&mut self, overlay: WidgetHandle, child: WidgetHandle) {
        if let Some(old) = self.widgets.get(&child).and_then(|c| c.parent) {
            self.detach(old, child);
        }
        self.entry(child).parent = Some(overlay);
        self.entry(overlay).overlays.push(child);
    }

    fn remove_overlay_child(&mut self, overlay: WidgetHandle, child: WidgetHandle) {
        self.detach(overlay, child);
    }

    fn set_presented(&mut self, widget: WidgetHandle, presented: bool) {
        self.entry(widget).presented = presented;
    }

    fn set_size_request(&mut self, widget: WidgetHandle, size: Size) {
        self.entry(widget).size_request = size;
    }

    fn allocated_size(&self, widget: WidgetHandle) -> Size {
        self.widgets
            .get(&widget)
            .map(|w| w.allocation)
            .unwrap_or(Size::ZERO)
    }

    fn relative_position(&self, widget: WidgetHandle, ancestor: WidgetHandle) -> Option<(f64, f64)> {
        let (mut x, mut y) = (0.0, 0.0);
        let mut current = widget;
        loop {
            if current == ancestor {
                return Some((x, y));
            }
            let w = self.widgets.get(&current)?;
            x += w.position.0;
            y += w.position.1;
            current = w.parent?;
        }
    }

    fn add_tick_callback(&mut self, widget: WidgetHandle) -> TickId {
        let tick = TickId(self.next_tick);
        self.next_tick += 1;
        self.ticks.insert(tick, widget);
        tick
    }

    fn remove_tick_callback(&mut self, tick: TickId) {
        self.ticks.remove(&tick);
    }

    fn destroy(&mut self, widget: WidgetHandle) {
        if let Some(parent) = self.widgets.get(&widget).and_then(|w| w.parent) {
            self.detach(parent, widget);
        }
        self.widgets.remove(&widget);
        self.ticks.retain(|_, w| *w != widget);
    }
}
