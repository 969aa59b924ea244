use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{PaneId, TabId};

/// Outbound notifications from the layout core.
///
/// `StateChanged` is published after every committed tree or floating-session
/// mutation; the session snapshot writer subscribes to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    StateChanged { tab_id: TabId },
    TabOpened(TabId),
    TabClosed(TabId),
    PaneOpened { tab_id: TabId, pane_id: PaneId },
    PaneClosed { tab_id: TabId, pane_id: PaneId },
    PaneFocused { tab_id: TabId, pane_id: PaneId },
    FloatingShown { tab_id: TabId, session: String },
    FloatingHidden { tab_id: TabId, session: String },
    FloatingReleased { tab_id: TabId, session: String },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish to all current subscribers. Returns how many received it.
    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Shorthand for the snapshot signal.
    pub fn state_changed(&self, tab_id: &TabId) -> usize {
        self.publish(Event::StateChanged {
            tab_id: tab_id.clone(),
        })
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
