use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity level for transient user-facing notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A transient toast. Collaborator failures surface through these rather
/// than aborting the operation that hit them.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    fn with_level(level: NotificationLevel, message: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, message, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Warning, message, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Error, message, 8)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Bounded FIFO of toasts; expired entries are dropped lazily.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Push a toast, evicting expired entries and then the oldest one if full.
    pub fn push(&mut self, notification: Notification) {
        self.items.retain(|n| !n.is_expired());
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Currently visible toasts, oldest first.
    pub fn visible(&mut self) -> impl Iterator<Item = &Notification> {
        self.items.retain(|n| !n.is_expired());
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(8)
    }
}
