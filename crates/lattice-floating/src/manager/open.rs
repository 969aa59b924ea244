//! Show/hide routing and navigation for floating sessions.

use lattice_common::{ContentError, ContentProvider, TabId, WidgetHandle};

use super::lifecycle::hide_session;
use super::watcher::{resize_session, start_watcher};
use super::{Backends, FloatingManager, OpenOutcome};
use crate::key::SessionKey;
use crate::session::{FloatingSession, SessionState};

const BLANK_URL: &str = "about:blank";

impl FloatingManager {
    /// Open, reveal, or hide the session for `key`.
    ///
    /// Without a URL the session toggles; its first show loads a blank page
    /// with the address entry open. With a URL, the default session is
    /// revealed and navigated when the URL differs. A named profile given a
    /// URL hides when already visible, reveals untouched once started, and
    /// navigates only on its very first open. Other visible sessions on the
    /// tab are hidden before anything is revealed.
    pub fn open(
        &mut self,
        key: &SessionKey,
        url: Option<&str>,
        parent: WidgetHandle,
        be: &mut Backends<'_>,
    ) -> Result<OpenOutcome, ContentError> {
        let url = url.map(str::trim).filter(|u| !u.is_empty());
        let is_profile = !key.is_default();

        let visible = self.ensure(key, parent, be)?.is_visible();
        if url.is_some() && is_profile && visible {
            self.hide(key, be.widgets);
            tracing::info!(session = %key, "floating profile hidden by repeat open");
            return Ok(OpenOutcome::Hidden);
        }
        self.hide_others(key, be.widgets);

        let options = self.options;
        let session = self.ensure(key, parent, be)?;
        match url {
            Some(_) if is_profile && session.started => session.state = SessionState::Visible,
            Some(url) => show_url(session, url, be.content)?,
            None if session.is_visible() => {
                hide_session(session, be.widgets);
                tracing::info!(session = %key, "floating session toggled off");
                return Ok(OpenOutcome::Hidden);
            }
            None => show_toggle(session, be.content)?,
        }

        resize_session(session, &options, be.widgets);
        be.widgets.set_presented(session.widget, true);
        start_watcher(session, be.widgets);
        tracing::info!(
            session = %key,
            url = session.current_url().unwrap_or_default(),
            omnibox = session.omnibox_open(),
            "floating session shown"
        );
        Ok(OpenOutcome::Shown)
    }

    /// Load `url` into a session's surface. Blank input is ignored.
    pub fn navigate(
        &mut self,
        key: &SessionKey,
        url: &str,
        content: &mut dyn ContentProvider,
    ) -> Result<(), ContentError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(());
        }
        match self.sessions.get_mut(key) {
            Some(session) => navigate_session(session, url, content),
            None => Err(ContentError::AcquireFailed {
                pane_id: key.pane_id(),
                reason: "no floating session".into(),
            }),
        }
    }

    /// Route an address-bar submission. Returns `Ok(true)` when the visible
    /// session on `tab_id` had its address entry open and took the URL;
    /// `Ok(false)` means the caller should navigate the tab's active pane.
    pub fn navigate_from_omnibox(
        &mut self,
        tab_id: &TabId,
        url: &str,
        content: &mut dyn ContentProvider,
    ) -> Result<bool, ContentError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(false);
        }
        let Some(session) = self
            .sessions
            .values_mut()
            .find(|s| &s.key.tab_id == tab_id && s.omnibox_open())
        else {
            return Ok(false);
        };
        navigate_session(session, url, content)?;
        session.state = SessionState::Visible;
        Ok(true)
    }

    /// Flip the address entry of the visible session on `tab_id`. Returns
    /// the new open state, or `None` when no session is visible there.
    pub fn toggle_omnibox(&mut self, tab_id: &TabId) -> Option<bool> {
        let session = self
            .sessions
            .values_mut()
            .find(|s| &s.key.tab_id == tab_id && s.is_visible())?;
        session.state = SessionState::shown(!session.omnibox_open());
        Some(session.omnibox_open())
    }
}

/// Reveal and navigate unless already showing `url`. Visibility is rolled
/// back if the navigation fails.
fn show_url(
    session: &mut FloatingSession,
    url: &str,
    content: &mut dyn ContentProvider,
) -> Result<(), ContentError> {
    let previous = session.state;
    session.state = SessionState::Visible;
    let should_navigate = !session.started || session.current_url() != Some(url);
    if should_navigate {
        if let Err(err) = navigate_session(session, url, content) {
            session.state = previous;
            return Err(err);
        }
    }
    Ok(())
}

/// Reveal a hidden session without a target URL.
fn show_toggle(session: &mut FloatingSession, content: &mut dyn ContentProvider) -> Result<(), ContentError> {
    let first_show = !session.started;
    let omnibox = first_show || session.current_url() == Some(BLANK_URL);
    session.state = SessionState::shown(omnibox);
    if first_show {
        if let Err(err) = navigate_session(session, BLANK_URL, content) {
            session.state = SessionState::Hidden;
            return Err(err);
        }
    }
    Ok(())
}

fn navigate_session(
    session: &mut FloatingSession,
    url: &str,
    content: &mut dyn ContentProvider,
) -> Result<(), ContentError> {
    content.navigate(session.surface, url)?;
    session.current_url = Some(url.to_string());
    session.started = true;
    tracing::debug!(session = %session.key, url, "floating session navigated");
    Ok(())
}
