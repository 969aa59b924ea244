use std::collections::HashMap;

use lattice_common::{ContainerKind, PaneId, WidgetFactory, WidgetHandle};

use crate::tree::NodeId;

/// Mirror of one tab's pane tree in the widget graph.
///
/// Every split and stack node maps to a container, every leaf to a titled
/// frame holding the pane's content widget. Content widgets come from the
/// shared browsing-engine pool and survive rebuilds; containers and frames
/// are recreated freely.
#[derive(Debug)]
pub struct WidgetSync {
    pub(super) root: WidgetHandle,
    /// The widget currently attached directly under `root`.
    pub(super) top: Option<WidgetHandle>,
    /// Containers and frames by tree node.
    pub(super) nodes: HashMap<NodeId, WidgetHandle>,
    pub(super) frames: HashMap<PaneId, WidgetHandle>,
    pub(super) content: HashMap<PaneId, WidgetHandle>,
}

impl WidgetSync {
    /// Create the tab's root overlay. Nothing is attached until the first
    /// [`rebuild`](Self::rebuild).
    pub fn new(widgets: &mut dyn WidgetFactory, title: &str) -> Self {
        let root = widgets.create_container(ContainerKind::Overlay, title);
        widgets.set_presented(root, true);
        Self {
            root,
            top: None,
            nodes: HashMap::new(),
            frames: HashMap::new(),
            content: HashMap::new(),
        }
    }

    /// The tab view's root. Floating overlays attach here.
    pub fn root(&self) -> WidgetHandle {
        self.root
    }

    pub fn frame_for(&self, pane_id: &PaneId) -> Option<WidgetHandle> {
        self.frames.get(pane_id).copied()
    }

    pub fn container_for(&self, node: NodeId) -> Option<WidgetHandle> {
        self.nodes.get(&node).copied()
    }

    pub fn content_widget(&self, pane_id: &PaneId) -> Option<WidgetHandle> {
        self.content.get(pane_id).copied()
    }
}
