//! Tab lifecycle: each tab owns a workspace and a widget view.

use lattice_common::{ContentProvider, Event, LatticeError, TabId, WidgetFactory};
use lattice_floating::Backends;
use lattice_tiling::{WidgetSync, Workspace};

use super::core::LatticeApp;

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    /// Open a tab with one fresh pane and make it active.
    ///
    /// The pane's content is acquired before the tab is registered, so a
    /// pool failure leaves the tab list untouched.
    pub fn new_tab(&mut self) -> Result<TabId, LatticeError> {
        let workspace = Workspace::with_settings(self.settings.clone());
        let mut view = WidgetSync::new(&mut self.widgets, "tab");
        if let Err(err) = view.rebuild(workspace.tree(), &mut self.content, &mut self.widgets) {
            for pane_id in view.teardown(&mut self.widgets) {
                self.content.release(&pane_id);
            }
            self.content.release(workspace.active_pane());
            return Err(self.report(err));
        }

        let pane_id = workspace.active_pane().clone();
        let tab_id = self.tabs.create(workspace);
        self.views.insert(tab_id.clone(), view);
        self.refresh_focus_override();

        self.event_bus.publish(Event::TabOpened(tab_id.clone()));
        self.event_bus.publish(Event::PaneOpened {
            tab_id: tab_id.clone(),
            pane_id,
        });
        self.state_changed(&tab_id);
        Ok(tab_id)
    }

    /// Close a tab, returning its panes and floating sessions to the pool.
    /// The last remaining tab is kept open.
    pub fn close_tab(&mut self, tab_id: &TabId) -> Result<bool, LatticeError> {
        if self.tabs.get(tab_id).is_none() {
            return Err(LatticeError::Other(format!("unknown tab: {tab_id}")));
        }
        if self.tabs.len() <= 1 {
            tracing::debug!(tab_id = %tab_id, "refusing to close last tab");
            return Ok(false);
        }

        let mut be = Backends::new(&mut self.content, &mut self.widgets);
        let released = self.floating.release_tab(tab_id, &mut be);
        for key in released {
            self.event_bus.publish(Event::FloatingReleased {
                tab_id: key.tab_id,
                session: key.session,
            });
        }

        let Some(tab) = self.tabs.close(tab_id) else {
            return Ok(false);
        };
        if let Some(view) = self.views.remove(tab_id) {
            view.teardown(&mut self.widgets);
        }
        for pane_id in tab.workspace.tree().pane_ids() {
            self.content.release(&pane_id);
        }
        self.refresh_focus_override();

        self.event_bus.publish(Event::TabClosed(tab_id.clone()));
        if let Some(active) = self.tabs.active_id() {
            self.state_changed(active);
        }
        Ok(true)
    }

    pub fn next_tab(&mut self) -> Option<TabId> {
        let id = self.tabs.next().cloned()?;
        self.refresh_focus_override();
        Some(id)
    }

    pub fn prev_tab(&mut self) -> Option<TabId> {
        let id = self.tabs.prev().cloned()?;
        self.refresh_focus_override();
        Some(id)
    }

    pub fn activate_tab(&mut self, tab_id: &TabId) -> bool {
        let activated = self.tabs.activate(tab_id);
        if activated {
            self.refresh_focus_override();
        }
        activated
    }
}
