//! Floating overlay actions for the active tab.

use lattice_common::{ContentProvider, Event, LatticeError, TabId, WidgetFactory};
use lattice_floating::{Backends, OpenOutcome, SessionKey};

use super::core::LatticeApp;

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    /// Hide whichever floating pane is visible on the active tab; with none
    /// visible, show the anonymous one.
    pub fn toggle_floating(&mut self) -> Result<OpenOutcome, LatticeError> {
        if self.hide_floating()? {
            return Ok(OpenOutcome::Hidden);
        }
        let tab_id = self.active_tab_id()?;
        self.open_floating(SessionKey::default_for(tab_id), None)
    }

    /// Reveal the anonymous floating pane at `url`.
    pub fn open_floating_url(&mut self, url: &str) -> Result<OpenOutcome, LatticeError> {
        let tab_id = self.active_tab_id()?;
        self.open_floating(SessionKey::default_for(tab_id), Some(url))
    }

    /// Toggle the named profile's floating pane at its configured URL.
    pub fn open_floating_profile(&mut self, name: &str) -> Result<OpenOutcome, LatticeError> {
        let tab_id = self.active_tab_id()?;
        let Some(profile) = self.config.workspace.floating_pane.profiles.get(name.trim()) else {
            let err = LatticeError::Floating(format!("unknown floating profile: {name}"));
            return Err(self.report(err));
        };
        let url = profile.url.clone();
        self.open_floating(SessionKey::new(tab_id, name), Some(&url))
    }

    fn open_floating(&mut self, key: SessionKey, url: Option<&str>) -> Result<OpenOutcome, LatticeError> {
        let parent = self
            .views
            .get(&key.tab_id)
            .map(|v| v.root())
            .ok_or_else(|| LatticeError::Other(format!("no view for tab {}", key.tab_id)))?;

        let mut be = Backends::new(&mut self.content, &mut self.widgets);
        let outcome = match self.floating.open(&key, url, parent, &mut be) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.refresh_focus_override();
                return Err(self.report(err));
            }
        };
        self.refresh_focus_override();

        let event = match outcome {
            OpenOutcome::Shown => Event::FloatingShown {
                tab_id: key.tab_id.clone(),
                session: key.session.clone(),
            },
            OpenOutcome::Hidden => Event::FloatingHidden {
                tab_id: key.tab_id.clone(),
                session: key.session.clone(),
            },
        };
        self.event_bus.publish(event);
        self.state_changed(&key.tab_id);
        Ok(outcome)
    }

    /// Hide the visible floating pane of the active tab, keeping its page.
    pub fn hide_floating(&mut self) -> Result<bool, LatticeError> {
        let tab_id = self.active_tab_id()?;
        let key = self.floating.active_session(&tab_id).map(|s| s.key().clone());
        let hidden = self.floating.close_active(&tab_id, &mut self.widgets);
        if let (true, Some(key)) = (hidden, key) {
            self.refresh_focus_override();
            self.event_bus.publish(Event::FloatingHidden {
                tab_id: key.tab_id,
                session: key.session,
            });
            self.state_changed(&tab_id);
        }
        Ok(hidden)
    }

    /// Tear down the visible floating pane of the active tab.
    pub fn release_floating(&mut self) -> Result<bool, LatticeError> {
        let tab_id = self.active_tab_id()?;
        let key = self.floating.active_session(&tab_id).map(|s| s.key().clone());
        let mut be = Backends::new(&mut self.content, &mut self.widgets);
        let released = self.floating.close_and_release_active(&tab_id, &mut be);
        if let (true, Some(key)) = (released, key) {
            self.refresh_focus_override();
            self.event_bus.publish(Event::FloatingReleased {
                tab_id: key.tab_id,
                session: key.session,
            });
            self.state_changed(&tab_id);
        }
        Ok(released)
    }

    /// Flip the address bar: the visible floating session's if there is
    /// one, else the tiled view's.
    pub fn toggle_omnibox(&mut self) -> Result<bool, LatticeError> {
        let tab_id = self.active_tab_id()?;
        let open = match self.floating.toggle_omnibox(&tab_id) {
            Some(open) => open,
            None => {
                self.omnibox_open = !self.omnibox_open;
                self.omnibox_open
            }
        };
        tracing::debug!(tab_id = %tab_id, open, "address bar toggled");
        Ok(open)
    }

    /// Submit an address-bar URL. A floating session with its address entry
    /// open takes it; otherwise the active tiled pane navigates.
    pub fn navigate(&mut self, url: &str) -> Result<(), LatticeError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(());
        }
        let tab_id = self.active_tab_id()?;
        match self.floating.navigate_from_omnibox(&tab_id, url, &mut self.content) {
            Ok(true) => {
                self.state_changed(&tab_id);
                return Ok(());
            }
            Ok(false) => {}
            Err(err) => return Err(self.report(err)),
        }
        self.navigate_active_pane(&tab_id, url)
    }

    fn navigate_active_pane(&mut self, tab_id: &TabId, url: &str) -> Result<(), LatticeError> {
        let Some(tab) = self.tabs.get_mut(tab_id) else {
            return Err(LatticeError::Other(format!("unknown tab: {tab_id}")));
        };
        let pane_id = tab.workspace.active_pane().clone();
        let navigated = self
            .content
            .acquire(&pane_id)
            .and_then(|surface| self.content.navigate(surface, url));
        if let Err(err) = navigated {
            return Err(self.report(err));
        }
        tab.workspace.update_pane(&pane_id, url, None)?;
        self.omnibox_open = false;
        tracing::info!(pane_id = %pane_id, url, "pane navigated");
        self.state_changed(tab_id);
        Ok(())
    }

    /// Point the focus override at the active tab's visible floating pane.
    pub(super) fn refresh_focus_override(&self) {
        let pane = self
            .tabs
            .active_id()
            .and_then(|tab_id| self.floating.active_session(tab_id))
            .map(|s| s.pane_id().clone());
        self.focus.apply(pane);
    }
}
