use chrono::{DateTime, Utc};
use lattice_common::PaneId;
use serde::{Deserialize, Serialize};

/// URI given to panes that have not navigated anywhere yet.
pub const BLANK_URI: &str = "about:blank";

/// A leaf content slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pane {
    pub id: PaneId,
    pub uri: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Pane {
    pub fn new(id: PaneId, uri: impl Into<String>) -> Self {
        Self {
            id,
            uri: uri.into(),
            title: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn blank(id: PaneId) -> Self {
        Self::new(id, BLANK_URI)
    }

    /// Title for frames and tab strips: the page title, or the URI before
    /// the page has reported one.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.uri
        } else {
            &self.title
        }
    }
}
