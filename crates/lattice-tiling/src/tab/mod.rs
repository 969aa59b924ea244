//! Tabs: one workspace each, kept in an ordered list with one active tab.

use lattice_common::{new_tab_id, TabId};

use crate::workspace::Workspace;

#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    /// Zero-based place in the tab strip; kept contiguous by [`TabList`].
    pub position: usize,
    pub workspace: Workspace,
}

impl Tab {
    /// Title for the tab strip: explicit title, else the active pane's.
    pub fn display_title(&self) -> &str {
        if !self.title.is_empty() {
            return &self.title;
        }
        self.workspace
            .tree()
            .pane(self.workspace.active_pane())
            .map(|p| p.display_title())
            .unwrap_or_default()
    }
}

/// Ordered tabs of one window.
#[derive(Debug, Clone, Default)]
pub struct TabList {
    tabs: Vec<Tab>,
    active: usize,
}

impl TabList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab holding `workspace` and make it active.
    pub fn create(&mut self, workspace: Workspace) -> TabId {
        let id = new_tab_id();
        self.insert(id.clone(), workspace);
        id
    }

    /// Append a tab with a known id (session restore).
    pub fn insert(&mut self, id: TabId, workspace: Workspace) {
        self.tabs.push(Tab {
            id: id.clone(),
            title: String::new(),
            position: self.tabs.len(),
            workspace,
        });
        self.active = self.tabs.len() - 1;
        tracing::info!(tab_id = %id, count = self.tabs.len(), "tab created");
    }

    /// Remove a tab and hand it back so its content can be released. The
    /// active tab moves to the neighbor when the active one closes.
    pub fn close(&mut self, id: &TabId) -> Option<Tab> {
        let idx = self.index_of(id)?;
        let tab = self.tabs.remove(idx);
        if idx < self.active {
            self.active -= 1;
        }
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len().saturating_sub(1);
        }
        self.renumber();
        tracing::info!(tab_id = %id, remaining = self.tabs.len(), "tab closed");
        Some(tab)
    }

    pub fn activate(&mut self, id: &TabId) -> bool {
        match self.index_of(id) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    /// Cycle forward, wrapping. Returns the newly active tab.
    pub fn next(&mut self) -> Option<&TabId> {
        if self.tabs.is_empty() {
            return None;
        }
        self.active = (self.active + 1) % self.tabs.len();
        self.tabs.get(self.active).map(|t| &t.id)
    }

    /// Cycle backward, wrapping.
    pub fn prev(&mut self) -> Option<&TabId> {
        if self.tabs.is_empty() {
            return None;
        }
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        self.tabs.get(self.active).map(|t| &t.id)
    }

    /// Move the tab at `from` to `to`; the same tab stays active.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() || to >= self.tabs.len() {
            return false;
        }
        let active_id = self.tabs[self.active].id.clone();
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        self.renumber();
        self.active = self.index_of(&active_id).unwrap_or(0);
        true
    }

    pub fn get(&self, id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == id)
    }

    pub fn get_mut(&mut self, id: &TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| &t.id == id)
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_id(&self) -> Option<&TabId> {
        self.active().map(|t| &t.id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }

    fn index_of(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == id)
    }

    fn renumber(&mut self) {
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.position = i;
        }
    }
}
