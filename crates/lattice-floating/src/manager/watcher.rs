//! Viewport-tracking resize watcher.

use lattice_common::{Size, TickControl, TickId, WidgetFactory, WidgetHandle};

use super::FloatingManager;
use crate::key::SessionKey;
use crate::session::{FloatingSession, Watcher};
use crate::sizing::{allocation_rect, overlay_dimensions, FloatingOptions, Placement};

/// Push a new size request only when the desired size moved.
pub(crate) fn resize_session(session: &mut FloatingSession, options: &FloatingOptions, widgets: &mut dyn WidgetFactory) {
    let desired = overlay_dimensions(widgets.allocated_size(session.parent), options);
    if desired == session.applied {
        return;
    }
    widgets.set_size_request(session.widget, desired);
    session.applied = desired;
}

pub(crate) fn start_watcher(session: &mut FloatingSession, widgets: &mut dyn WidgetFactory) {
    if session.watcher.is_running() {
        return;
    }
    let tick = widgets.add_tick_callback(session.parent);
    session.watcher = Watcher::Running(tick);
}

pub(crate) fn stop_watcher(session: &mut FloatingSession, widgets: &mut dyn WidgetFactory) {
    if let Watcher::Running(tick) = session.watcher {
        widgets.remove_tick_callback(tick);
    }
    session.watcher = Watcher::Stopped;
}

impl FloatingManager {
    /// One frame of a resize watcher. `Break` means the registration is dead
    /// (session released or hidden) and the caller should drop it.
    pub fn handle_tick(&mut self, tick: TickId, widgets: &mut dyn WidgetFactory) -> TickControl {
        let options = self.options;
        let Some(session) = self
            .sessions
            .values_mut()
            .find(|s| s.watcher == Watcher::Running(tick))
        else {
            tracing::debug!(?tick, "tick for released floating session");
            return TickControl::Break;
        };
        if !session.is_visible() {
            session.watcher = Watcher::Stopped;
            return TickControl::Break;
        }
        resize_session(session, &options, widgets);
        TickControl::Continue
    }

    /// Ticks of every running watcher.
    pub fn running_ticks(&self) -> Vec<TickId> {
        let mut ticks: Vec<TickId> = self
            .sessions
            .values()
            .filter_map(|s| match s.watcher {
                Watcher::Running(tick) => Some(tick),
                Watcher::Stopped => None,
            })
            .collect();
        ticks.sort();
        ticks
    }

    /// Re-apply the size of one session immediately.
    pub fn resize(&mut self, key: &SessionKey, widgets: &mut dyn WidgetFactory) -> bool {
        let options = self.options;
        match self.sessions.get_mut(key) {
            Some(session) => {
                resize_session(session, &options, widgets);
                true
            }
            None => false,
        }
    }

    /// Where the overlay's layout should place a floating widget inside an
    /// overlay of size `overlay`.
    pub fn allocation_for(&self, widget: WidgetHandle, overlay: Size) -> Option<Placement> {
        let session = self.sessions.values().find(|s| s.widget == widget)?;
        let desired = if session.applied.width <= 0 || session.applied.height <= 0 {
            overlay_dimensions(overlay, &self.options)
        } else {
            session.applied
        };
        allocation_rect(overlay, desired)
    }
}
