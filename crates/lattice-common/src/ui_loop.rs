//! Post-to-loop primitive.
//!
//! Background work (clipboard writes, history recording, engine callbacks)
//! never touches layout state directly. It posts a [`UiTask`] through a
//! cloneable [`UiPoster`]; the UI loop drains the queue with
//! [`UiQueue::pump`] before its next mutation.

use tokio::sync::mpsc;

use crate::notifications::Notification;
use crate::types::{PaneId, TabId};

/// Work marshaled back onto the UI loop.
#[derive(Debug, Clone)]
pub enum UiTask {
    /// A tiled pane finished loading `url`.
    PaneLoaded {
        tab_id: TabId,
        pane_id: PaneId,
        url: String,
        title: Option<String>,
    },
    /// A floating session's surface navigated on its own.
    FloatingLoaded {
        tab_id: TabId,
        session: String,
        url: String,
    },
    Notify(Notification),
}

#[derive(Debug, Clone)]
pub struct UiPoster {
    sender: mpsc::UnboundedSender<UiTask>,
}

impl UiPoster {
    /// Returns `false` once the UI loop has shut down.
    pub fn post(&self, task: UiTask) -> bool {
        self.sender.send(task).is_ok()
    }
}

#[derive(Debug)]
pub struct UiQueue {
    sender: mpsc::UnboundedSender<UiTask>,
    receiver: mpsc::UnboundedReceiver<UiTask>,
}

impl UiQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    pub fn poster(&self) -> UiPoster {
        UiPoster {
            sender: self.sender.clone(),
        }
    }

    /// Drain everything posted so far without blocking.
    pub fn pump(&mut self) -> Vec<UiTask> {
        let mut tasks = Vec::new();
        while let Ok(task) = self.receiver.try_recv() {
            tasks.push(task);
        }
        if !tasks.is_empty() {
            tracing::debug!(count = tasks.len(), "drained UI tasks");
        }
        tasks
    }
}

impl Default for UiQueue {
    fn default() -> Self {
        Self::new()
    }
}
