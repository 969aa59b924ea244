//! Per-iteration UI loop work: drain posted tasks, drive resize watchers.

use lattice_common::{ContentProvider, TickControl, UiTask, WidgetFactory};
use lattice_floating::SessionKey;

use super::core::LatticeApp;

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    /// Apply everything background work posted since the last call.
    /// Returns how many tasks were handled.
    pub fn pump(&mut self) -> usize {
        let tasks = self.ui_queue.pump();
        let count = tasks.len();
        for task in tasks {
            self.apply_task(task);
        }
        count
    }

    fn apply_task(&mut self, task: UiTask) {
        match task {
            UiTask::PaneLoaded {
                tab_id,
                pane_id,
                url,
                title,
            } => {
                let Some(tab) = self.tabs.get_mut(&tab_id) else {
                    tracing::debug!(tab_id = %tab_id, "load report for closed tab");
                    return;
                };
                match tab.workspace.update_pane(&pane_id, url, title) {
                    Ok(()) => self.state_changed(&tab_id),
                    Err(e) => tracing::debug!(pane_id = %pane_id, error = %e, "load report for closed pane"),
                }
            }
            UiTask::FloatingLoaded {
                tab_id,
                session,
                url,
            } => {
                let pane_id = SessionKey::new(tab_id.clone(), &session).pane_id();
                if self.floating.record_loaded_url(&pane_id, &url) {
                    self.state_changed(&tab_id);
                } else {
                    tracing::debug!(pane_id = %pane_id, "load report for released session");
                }
            }
            UiTask::Notify(notification) => self.notifications.push(notification),
        }
    }

    /// One render tick: run every floating resize watcher and drop the
    /// registrations that asked to stop.
    pub fn frame_tick(&mut self) -> usize {
        let ticks = self.floating.running_ticks();
        for tick in &ticks {
            if self.floating.handle_tick(*tick, &mut self.widgets) == TickControl::Break {
                self.widgets.remove_tick_callback(*tick);
            }
        }
        ticks.len()
    }
}
