//! Session construction, hiding, and teardown.

use lattice_common::{ContainerKind, ContentError, Size, TabId, WidgetFactory, WidgetHandle};

use super::watcher::stop_watcher;
use super::{Backends, FloatingManager};
use crate::key::SessionKey;
use crate::session::{FloatingSession, SessionState, Watcher};

impl FloatingManager {
    /// Get or lazily create the session for `key`, attached to `parent`.
    ///
    /// An existing session is moved onto `parent` when the tab view was
    /// rebuilt; its surface and state are kept.
    pub fn ensure(
        &mut self,
        key: &SessionKey,
        parent: WidgetHandle,
        be: &mut Backends<'_>,
    ) -> Result<&mut FloatingSession, ContentError> {
        if !self.sessions.contains_key(key) {
            let session = create_session(key, parent, be)?;
            self.sessions.insert(key.clone(), session);
        }
        let session = self.sessions.get_mut(key).ok_or_else(|| ContentError::AcquireFailed {
            pane_id: key.pane_id(),
            reason: "floating session missing after insert".into(),
        })?;
        if session.parent != parent {
            be.widgets.remove_overlay_child(session.parent, session.widget);
            be.widgets.add_overlay_child(parent, session.widget);
            tracing::debug!(session = %key, "floating session re-parented");
            session.parent = parent;
        }
        Ok(session)
    }

    /// Hide without tearing anything down. The surface stays mapped.
    pub fn hide(&mut self, key: &SessionKey, widgets: &mut dyn WidgetFactory) -> bool {
        match self.sessions.get_mut(key) {
            Some(session) => {
                hide_session(session, widgets);
                true
            }
            None => false,
        }
    }

    /// Hide every visible session on `key`'s tab except `key` itself.
    pub(crate) fn hide_others(&mut self, key: &SessionKey, widgets: &mut dyn WidgetFactory) {
        for session in self.sessions.values_mut() {
            if session.key.tab_id == key.tab_id && &session.key != key && session.is_visible() {
                hide_session(session, widgets);
            }
        }
    }

    /// Full teardown: surface back to the pool, widget destroyed, entry
    /// removed.
    pub fn release(&mut self, key: &SessionKey, be: &mut Backends<'_>) -> bool {
        let Some(mut session) = self.sessions.remove(key) else {
            return false;
        };
        stop_watcher(&mut session, be.widgets);
        be.widgets.set_presented(session.widget, false);
        be.widgets.remove_overlay_child(session.parent, session.widget);
        be.widgets.destroy(session.widget);
        be.content.release(&session.pane_id);
        tracing::info!(session = %key, pane_id = %session.pane_id, "floating session released");
        true
    }

    /// Release every session of a closing tab.
    pub fn release_tab(&mut self, tab_id: &TabId, be: &mut Backends<'_>) -> Vec<SessionKey> {
        let mut keys: Vec<SessionKey> = self
            .sessions
            .keys()
            .filter(|k| &k.tab_id == tab_id)
            .cloned()
            .collect();
        keys.sort();
        for key in &keys {
            self.release(key, be);
        }
        keys
    }

    /// Release everything (shutdown).
    pub fn release_all(&mut self, be: &mut Backends<'_>) -> usize {
        let keys: Vec<SessionKey> = self.sessions.keys().cloned().collect();
        for key in &keys {
            self.release(key, be);
        }
        keys.len()
    }

    /// Hide the visible session on `tab_id`. False when none is visible.
    pub fn close_active(&mut self, tab_id: &TabId, widgets: &mut dyn WidgetFactory) -> bool {
        match self.active_key(tab_id) {
            Some(key) => self.hide(&key, widgets),
            None => false,
        }
    }

    /// Release the visible session on `tab_id`.
    pub fn close_and_release_active(&mut self, tab_id: &TabId, be: &mut Backends<'_>) -> bool {
        match self.active_key(tab_id) {
            Some(key) => self.release(&key, be),
            None => false,
        }
    }

    pub(crate) fn active_key(&self, tab_id: &TabId) -> Option<SessionKey> {
        self.active_session(tab_id).map(|s| s.key.clone())
    }
}

fn create_session(
    key: &SessionKey,
    parent: WidgetHandle,
    be: &mut Backends<'_>,
) -> Result<FloatingSession, ContentError> {
    let pane_id = key.pane_id();
    let surface = be.content.acquire(&pane_id)?;
    let content_widget = match be.content.wrap_as_widget(surface) {
        Ok(widget) => widget,
        Err(err) => {
            be.content.release(&pane_id);
            return Err(err);
        }
    };

    let widget = be.widgets.create_container(ContainerKind::Titled, &key.session);
    be.widgets.append_child(widget, content_widget);
    be.widgets.set_presented(widget, false);
    be.widgets.add_overlay_child(parent, widget);

    tracing::debug!(session = %key, pane_id = %pane_id, "floating session created");
    Ok(FloatingSession {
        key: key.clone(),
        pane_id,
        surface,
        widget,
        parent,
        state: SessionState::Hidden,
        started: false,
        current_url: None,
        applied: Size::ZERO,
        watcher: Watcher::Stopped,
    })
}

pub(crate) fn hide_session(session: &mut FloatingSession, widgets: &mut dyn WidgetFactory) {
    stop_watcher(session, widgets);
    session.state = SessionState::Hidden;
    widgets.set_presented(session.widget, false);
    // Forces a fresh size request on the next show.
    session.applied = Size::ZERO;
    tracing::debug!(session = %session.key, "floating session hidden");
}
