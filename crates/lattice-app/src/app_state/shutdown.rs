//! Graceful shutdown: floating sessions, then tab views, then pane content.

use lattice_common::{ContentProvider, Event, WidgetFactory};
use lattice_floating::Backends;

use super::core::LatticeApp;

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    /// Release every surface and widget this window holds. Safe to call
    /// more than once.
    pub fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Floating overlays sit on top of the tab views
        let mut be = Backends::new(&mut self.content, &mut self.widgets);
        let sessions = self.floating.release_all(&mut be);

        // 2. Tab views and the panes behind them
        let mut panes = 0;
        for tab_id in self.tabs.ids() {
            if let Some(view) = self.views.remove(&tab_id) {
                view.teardown(&mut self.widgets);
            }
            if let Some(tab) = self.tabs.close(&tab_id) {
                for pane_id in tab.workspace.tree().pane_ids() {
                    self.content.release(&pane_id);
                    panes += 1;
                }
            }
        }
        self.focus.apply(None);

        if sessions + panes > 0 {
            self.event_bus.publish(Event::Shutdown);
        }
        tracing::info!(sessions, panes, "Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use lattice_common::{Direction, Event};

    use super::super::test_support::{app, app_with_tab};

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();
        app.shutdown();
        assert!(app.tabs().is_empty());
    }

    #[test]
    fn shutdown_releases_everything() {
        let (mut app, _) = app_with_tab();
        app.split(Direction::Down).unwrap();
        app.new_tab().unwrap();
        app.toggle_floating().unwrap();
        let mut rx = app.event_bus().subscribe();

        app.shutdown();
        assert_eq!(app.content().live_surfaces(), 0);
        assert!(app.widgets().active_ticks().is_empty());
        assert!(app.floating().is_empty());
        assert!(app.tabs().is_empty());
        assert!(app.effective_active_pane().is_none());
        assert_eq!(rx.try_recv().unwrap(), Event::Shutdown);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let (mut app, _) = app_with_tab();
        app.shutdown();
        let mut rx = app.event_bus().subscribe();
        app.shutdown();
        assert!(rx.try_recv().is_err());
        assert_eq!(app.content().live_surfaces(), 0);
    }
}
