//! The floating session map and its operations.
//!
//! One manager per window owns every session, keyed by tab and session
//! name. Collaborators are passed in per call.

mod lifecycle;
mod open;
mod watcher;

use std::collections::HashMap;

use lattice_common::{ContentProvider, PaneId, TabId, WidgetFactory};

use crate::key::SessionKey;
use crate::session::FloatingSession;
use crate::sizing::FloatingOptions;

/// The collaborators a state transition may touch.
pub struct Backends<'a> {
    pub content: &'a mut dyn ContentProvider,
    pub widgets: &'a mut dyn WidgetFactory,
}

impl<'a> Backends<'a> {
    pub fn new(content: &'a mut dyn ContentProvider, widgets: &'a mut dyn WidgetFactory) -> Self {
        Self { content, widgets }
    }
}

/// What `open` left the session as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Shown,
    Hidden,
}

#[derive(Debug, Default)]
pub struct FloatingManager {
    pub(crate) sessions: HashMap<SessionKey, FloatingSession>,
    pub(crate) options: FloatingOptions,
}

impl FloatingManager {
    pub fn new(options: FloatingOptions) -> Self {
        Self {
            sessions: HashMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &FloatingOptions {
        &self.options
    }

    pub fn get(&self, key: &SessionKey) -> Option<&FloatingSession> {
        self.sessions.get(key)
    }

    /// Sessions of one tab, ordered by name.
    pub fn sessions_for_tab(&self, tab_id: &TabId) -> Vec<&FloatingSession> {
        let mut sessions: Vec<_> = self
            .sessions
            .values()
            .filter(|s| &s.key.tab_id == tab_id)
            .collect();
        sessions.sort_by(|a, b| a.key.cmp(&b.key));
        sessions
    }

    /// The visible session on `tab_id`, if any. There is at most one.
    pub fn active_session(&self, tab_id: &TabId) -> Option<&FloatingSession> {
        self.sessions
            .values()
            .find(|s| &s.key.tab_id == tab_id && s.is_visible())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Note a URL a floating page reached on its own.
    pub fn record_loaded_url(&mut self, pane_id: &PaneId, url: &str) -> bool {
        match self.sessions.values_mut().find(|s| &s.pane_id == pane_id) {
            Some(session) => {
                session.record_loaded_url(url);
                true
            }
            None => false,
        }
    }
}
