//! Serializable view of the window state, for the snapshot writer and the
//! headless driver's output.

use lattice_common::{ContentProvider, PaneId, TabId, WidgetFactory};
use lattice_floating::SessionState;
use lattice_tiling::NodeSnapshot;
use serde::Serialize;

use super::core::LatticeApp;

#[derive(Debug, Clone, Serialize)]
pub struct AppSnapshot {
    pub active_tab: Option<TabId>,
    pub tabs: Vec<TabSnapshot>,
    pub floating: Vec<FloatingSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
    pub position: usize,
    pub active_pane: PaneId,
    pub root: NodeSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct FloatingSnapshot {
    pub tab_id: TabId,
    pub session: String,
    pub pane_id: PaneId,
    pub state: SessionState,
    pub url: Option<String>,
}

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    pub fn snapshot(&self) -> AppSnapshot {
        let tabs = self
            .tabs
            .iter()
            .map(|tab| TabSnapshot {
                id: tab.id.clone(),
                title: tab.display_title().to_string(),
                position: tab.position,
                active_pane: tab.workspace.active_pane().clone(),
                root: tab.workspace.tree().snapshot(),
            })
            .collect();
        let floating = self
            .tabs
            .iter()
            .flat_map(|tab| self.floating.sessions_for_tab(&tab.id))
            .map(|s| FloatingSnapshot {
                tab_id: s.key().tab_id.clone(),
                session: s.key().session.clone(),
                pane_id: s.pane_id().clone(),
                state: s.state(),
                url: s.current_url().map(str::to_string),
            })
            .collect();
        AppSnapshot {
            active_tab: self.tabs.active_id().cloned(),
            tabs,
            floating,
        }
    }
}

#[cfg(test)]
mod tests {
    use lattice_common::Direction;

    use super::super::test_support::app_with_tab;

    #[test]
    fn snapshot_lists_tabs_and_floating_sessions() {
        let (mut app, tab) = app_with_tab();
        app.split(Direction::Right).unwrap();
        app.open_floating_url("https://notes.example.com").unwrap();

        let snapshot = app.snapshot();
        assert_eq!(snapshot.active_tab, Some(tab.clone()));
        assert_eq!(snapshot.tabs.len(), 1);
        assert_eq!(snapshot.floating.len(), 1);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["floating"][0]["state"], "visible");
        assert_eq!(json["floating"][0]["session"], "default");
        assert_eq!(json["floating"][0]["url"], "https://notes.example.com");
        assert_eq!(json["tabs"][0]["id"], tab.as_str());
    }
}
