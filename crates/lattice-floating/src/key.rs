use std::fmt;

use lattice_common::{PaneId, TabId};
use serde::{Deserialize, Serialize};

/// Session name used when none (or only whitespace) is given.
pub const DEFAULT_SESSION: &str = "default";

const PANE_ID_PREFIX: &str = "floating-pane:";

pub fn normalize_session_id(session: &str) -> &str {
    let trimmed = session.trim();
    if trimmed.is_empty() {
        DEFAULT_SESSION
    } else {
        trimmed
    }
}

/// Pane id of the surface backing a floating session.
pub fn floating_pane_id(tab_id: &TabId, session: &str) -> PaneId {
    PaneId::new(format!(
        "{PANE_ID_PREFIX}{tab_id}:{}",
        normalize_session_id(session)
    ))
}

/// Identity of a floating session: owning tab plus session name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionKey {
    pub tab_id: TabId,
    pub session: String,
}

impl SessionKey {
    pub fn new(tab_id: TabId, session: &str) -> Self {
        Self {
            tab_id,
            session: normalize_session_id(session).to_string(),
        }
    }

    pub fn default_for(tab_id: TabId) -> Self {
        Self::new(tab_id, DEFAULT_SESSION)
    }

    /// The anonymous session, as opposed to a named profile.
    pub fn is_default(&self) -> bool {
        self.session == DEFAULT_SESSION
    }

    pub fn pane_id(&self) -> PaneId {
        floating_pane_id(&self.tab_id, &self.session)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tab_id, self.session)
    }
}
