//! Per-session state: visibility machine, watcher, and cached size.

use lattice_common::{PaneId, Size, SurfaceHandle, TickId, WidgetHandle};
use serde::Serialize;

use crate::key::SessionKey;

/// Visibility of a floating session. The address-entry overlay can only be
/// open while the session is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Hidden,
    Visible,
    VisibleWithOmnibox,
}

impl SessionState {
    pub fn is_visible(self) -> bool {
        !matches!(self, SessionState::Hidden)
    }

    pub fn omnibox_open(self) -> bool {
        matches!(self, SessionState::VisibleWithOmnibox)
    }

    /// Visible state with the omnibox as requested.
    pub fn shown(omnibox: bool) -> Self {
        if omnibox {
            SessionState::VisibleWithOmnibox
        } else {
            SessionState::Visible
        }
    }
}

/// The per-frame resize watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Watcher {
    #[default]
    Stopped,
    Running(TickId),
}

impl Watcher {
    pub fn is_running(self) -> bool {
        matches!(self, Watcher::Running(_))
    }
}

/// One floating overlay. Persists hidden between toggles so the page and
/// any half-typed input survive.
#[derive(Debug, Clone)]
pub struct FloatingSession {
    pub(crate) key: SessionKey,
    pub(crate) pane_id: PaneId,
    pub(crate) surface: SurfaceHandle,
    /// Titled frame layered on the tab view.
    pub(crate) widget: WidgetHandle,
    /// The tab view overlay `widget` is attached to.
    pub(crate) parent: WidgetHandle,
    pub(crate) state: SessionState,
    /// Set by the first successful navigation.
    pub(crate) started: bool,
    pub(crate) current_url: Option<String>,
    pub(crate) applied: Size,
    pub(crate) watcher: Watcher,
}

impl FloatingSession {
    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn pane_id(&self) -> &PaneId {
        &self.pane_id
    }

    pub fn surface(&self) -> SurfaceHandle {
        self.surface
    }

    pub fn widget(&self) -> WidgetHandle {
        self.widget
    }

    pub fn parent(&self) -> WidgetHandle {
        self.parent
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn omnibox_open(&self) -> bool {
        self.state.omnibox_open()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Last size request pushed to the widget; zero after a hide.
    pub fn applied_size(&self) -> Size {
        self.applied
    }

    pub fn watcher(&self) -> Watcher {
        self.watcher
    }

    /// Note a URL the page reached on its own (link click, redirect).
    pub fn record_loaded_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        self.current_url = Some(url.to_string());
        self.started = true;
    }
}
