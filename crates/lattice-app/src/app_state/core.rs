//! LatticeApp struct definition and constructor.

use std::collections::HashMap;

use lattice_common::{
    ContentProvider, EventBus, LatticeError, Notification, NotificationQueue, PaneId, Rect, TabId,
    UiPoster, UiQueue, WidgetFactory,
};
use lattice_config::LatticeConfig;
use lattice_floating::{FloatingManager, FloatingOptions};
use lattice_tiling::{LayoutEngine, TabList, WidgetSync, Workspace, WorkspaceSettings};

use super::focus::FocusOverride;

/// Top-level application state for one window.
///
/// Everything here runs on the UI loop. Background work reaches it only
/// through [`UiPoster`] and is applied by [`LatticeApp::pump`].
pub struct LatticeApp<C, W> {
    pub(super) config: LatticeConfig,
    pub(super) settings: WorkspaceSettings,

    // Collaborators
    pub(super) content: C,
    pub(super) widgets: W,

    // Tiling
    pub(super) tabs: TabList,
    pub(super) views: HashMap<TabId, WidgetSync>,
    pub(super) layout: LayoutEngine,
    pub(super) viewport: Rect,

    // Floating overlays
    pub(super) floating: FloatingManager,
    pub(super) focus: FocusOverride,

    // Address bar of the tiled view (floating sessions track their own)
    pub(super) omnibox_open: bool,

    pub(super) event_bus: EventBus,
    pub(super) notifications: NotificationQueue,
    pub(super) ui_queue: UiQueue,
}

/// Disjoint borrows of the pieces a tree mutation touches.
pub(super) struct Parts<'a, C, W> {
    pub tab_id: TabId,
    pub workspace: &'a mut Workspace,
    pub view: &'a mut WidgetSync,
    pub content: &'a mut C,
    pub widgets: &'a mut W,
}

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    pub fn new(config: LatticeConfig, content: C, widgets: W) -> Self {
        let ws = &config.workspace;
        let settings = WorkspaceSettings {
            new_pane_url: ws.new_pane_url.clone(),
            resize_step_percent: ws.resize_step_percent,
            min_pane_percent: ws.min_pane_percent,
        };
        let layout = LayoutEngine::new(ws.layout.gap);
        let floating = FloatingManager::new(FloatingOptions::from(&ws.floating_pane));
        Self {
            config,
            settings,
            content,
            widgets,
            tabs: TabList::new(),
            views: HashMap::new(),
            layout,
            viewport: Rect::new(0.0, 0.0, 1280.0, 800.0),
            floating,
            focus: FocusOverride::default(),
            omnibox_open: false,
            event_bus: EventBus::default(),
            notifications: NotificationQueue::new(16),
            ui_queue: UiQueue::new(),
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    pub fn tabs(&self) -> &TabList {
        &self.tabs
    }

    pub fn floating(&self) -> &FloatingManager {
        &self.floating
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn widgets(&self) -> &W {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut W {
        &mut self.widgets
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    pub fn focus_override(&self) -> &FocusOverride {
        &self.focus
    }

    /// Handle background tasks post their results through.
    pub fn poster(&self) -> UiPoster {
        self.ui_queue.poster()
    }

    pub fn view(&self, tab_id: &TabId) -> Option<&WidgetSync> {
        self.views.get(tab_id)
    }

    pub fn active_workspace(&self) -> Option<&Workspace> {
        self.tabs.active().map(|t| &t.workspace)
    }

    /// Whether the tiled view's address bar is open.
    pub fn omnibox_open(&self) -> bool {
        self.omnibox_open
    }

    /// Headless viewport for geometric navigation before any widget has
    /// been allocated.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Rect::new(0.0, 0.0, width, height);
    }

    /// The pane keyboard input goes to: a visible floating session on the
    /// active tab wins over the tiled active pane.
    pub fn effective_active_pane(&self) -> Option<PaneId> {
        self.focus
            .active_pane()
            .or_else(|| self.active_workspace().map(|ws| ws.active_pane().clone()))
    }

    pub(super) fn active_tab_id(&self) -> Result<TabId, LatticeError> {
        self.tabs
            .active_id()
            .cloned()
            .ok_or_else(|| LatticeError::Other("no open tab".into()))
    }

    /// Surface a collaborator failure as a toast and hand it back.
    pub(super) fn report(&mut self, err: impl Into<LatticeError>) -> LatticeError {
        let err = err.into();
        tracing::warn!(error = %err, "operation failed");
        self.notifications.push(Notification::error(err.to_string()));
        err
    }

    /// Toast collaborator failures; structural misuse goes back to the
    /// caller silently.
    pub(super) fn settle<T>(&mut self, result: Result<T, LatticeError>) -> Result<T, LatticeError> {
        match result {
            Err(err @ LatticeError::Content(_)) => Err(self.report(err)),
            other => other,
        }
    }

    /// Split borrows of the active tab's workspace and view plus both
    /// collaborators.
    pub(super) fn active_parts(&mut self) -> Result<Parts<'_, C, W>, LatticeError> {
        let tab_id = self.active_tab_id()?;
        let Self {
            tabs,
            views,
            content,
            widgets,
            ..
        } = self;
        let workspace = &mut tabs
            .get_mut(&tab_id)
            .ok_or_else(|| LatticeError::Other(format!("unknown tab: {tab_id}")))?
            .workspace;
        let view = views
            .get_mut(&tab_id)
            .ok_or_else(|| LatticeError::Other(format!("no view for tab {tab_id}")))?;
        Ok(Parts {
            tab_id,
            workspace,
            view,
            content,
            widgets,
        })
    }

    pub(super) fn state_changed(&self, tab_id: &TabId) {
        self.event_bus.state_changed(tab_id);
    }
}
