//! Full rebuild and incremental stack updates of the widget graph.

use lattice_common::{ContainerKind, ContentError, ContentProvider, PaneId, WidgetFactory, WidgetHandle};

use super::WidgetSync;
use crate::tree::{NodeId, NodeKind, PaneTree};
use crate::workspace::TreeDelta;

impl WidgetSync {
    /// Content widget for `pane_id`, acquiring and wrapping a surface on
    /// first use. Callers run this before committing a tree change so a
    /// pool failure leaves the tree untouched.
    pub fn ensure_content(
        &mut self,
        pane_id: &PaneId,
        content: &mut dyn ContentProvider,
    ) -> Result<WidgetHandle, ContentError> {
        if let Some(widget) = self.content.get(pane_id) {
            return Ok(*widget);
        }
        let surface = content.acquire(pane_id)?;
        let widget = content.wrap_as_widget(surface)?;
        self.content.insert(pane_id.clone(), widget);
        Ok(widget)
    }

    /// Tear down every container and frame, then rebuild from `tree`,
    /// reattaching the existing content widgets.
    pub fn rebuild(
        &mut self,
        tree: &PaneTree,
        content: &mut dyn ContentProvider,
        widgets: &mut dyn WidgetFactory,
    ) -> Result<(), ContentError> {
        self.clear(widgets);
        let top = self.build_node(tree, tree.root(), content, widgets)?;
        widgets.append_child(self.root, top);
        self.top = Some(top);
        tracing::debug!(
            panes = self.frames.len(),
            containers = self.nodes.len() - self.frames.len(),
            "widget graph rebuilt"
        );
        Ok(())
    }

    /// Bring the widget graph in line with `delta`, touching only the
    /// affected stack when the change allows it.
    pub fn apply(
        &mut self,
        delta: &TreeDelta,
        tree: &PaneTree,
        content: &mut dyn ContentProvider,
        widgets: &mut dyn WidgetFactory,
    ) -> Result<(), ContentError> {
        match delta {
            TreeDelta::Unchanged | TreeDelta::RatioChanged { .. } => Ok(()),
            TreeDelta::Restructured => self.rebuild(tree, content, widgets),
            TreeDelta::StackActiveChanged { stack, .. } => {
                if !self.nodes.contains_key(stack) {
                    return self.rebuild(tree, content, widgets);
                }
                self.present_stack(tree, *stack, widgets);
                Ok(())
            }
            TreeDelta::StackMemberAdded { stack, pane, .. } => {
                let (Some(container), Some(leaf)) = (self.nodes.get(stack).copied(), tree.node_of(pane))
                else {
                    return self.rebuild(tree, content, widgets);
                };
                let frame = self.build_node(tree, leaf, content, widgets)?;
                widgets.append_child(container, frame);
                self.present_stack(tree, *stack, widgets);
                Ok(())
            }
            TreeDelta::StackMemberRemoved { stack, pane } => {
                if !self.nodes.contains_key(stack) {
                    return self.rebuild(tree, content, widgets);
                }
                self.drop_frame(pane, widgets);
                self.present_stack(tree, *stack, widgets);
                Ok(())
            }
        }
    }

    /// Forget a closed pane's content widget. The surface itself is
    /// returned to the pool by the caller.
    pub fn forget(&mut self, pane_id: &PaneId, widgets: &mut dyn WidgetFactory) {
        self.drop_frame(pane_id, widgets);
        self.content.remove(pane_id);
    }

    /// Destroy everything this sync created, including the root.
    pub fn teardown(mut self, widgets: &mut dyn WidgetFactory) -> Vec<PaneId> {
        self.clear(widgets);
        widgets.destroy(self.root);
        self.content.into_keys().collect()
    }

    fn clear(&mut self, widgets: &mut dyn WidgetFactory) {
        for (pane_id, frame) in &self.frames {
            if let Some(widget) = self.content.get(pane_id) {
                widgets.remove_child(*frame, *widget);
            }
        }
        if let Some(top) = self.top.take() {
            widgets.remove_child(self.root, top);
        }
        for (_, widget) in self.nodes.drain() {
            widgets.destroy(widget);
        }
        self.frames.clear();
    }

    fn drop_frame(&mut self, pane_id: &PaneId, widgets: &mut dyn WidgetFactory) {
        let Some(frame) = self.frames.remove(pane_id) else {
            return;
        };
        if let Some(widget) = self.content.get(pane_id) {
            widgets.remove_child(frame, *widget);
        }
        self.nodes.retain(|_, w| *w != frame);
        widgets.destroy(frame);
    }

    fn present_stack(&self, tree: &PaneTree, stack: NodeId, widgets: &mut dyn WidgetFactory) {
        let Some(view) = tree.stack(stack) else {
            return;
        };
        for (i, member) in view.members().iter().enumerate() {
            if let Some(widget) = self.nodes.get(member) {
                widgets.set_presented(*widget, i == view.active_index());
            }
        }
    }

    fn build_node(
        &mut self,
        tree: &PaneTree,
        id: NodeId,
        content: &mut dyn ContentProvider,
        widgets: &mut dyn WidgetFactory,
    ) -> Result<WidgetHandle, ContentError> {
        let node = tree
            .node(id)
            .ok_or_else(|| ContentError::WrapFailed(format!("no tree node {id}")))?;
        let handle = match node.kind() {
            NodeKind::Leaf(pane) => {
                let widget = self.ensure_content(&pane.id, content)?;
                let frame = widgets.create_container(ContainerKind::Titled, pane.display_title());
                widgets.append_child(frame, widget);
                self.frames.insert(pane.id.clone(), frame);
                frame
            }
            NodeKind::Split {
                orientation,
                children,
                ..
            } => {
                let container = widgets.create_container(ContainerKind::Split(*orientation), "");
                for child in children {
                    let child = self.build_node(tree, *child, content, widgets)?;
                    widgets.append_child(container, child);
                }
                container
            }
            NodeKind::Stack { children, active } => {
                let container = widgets.create_container(ContainerKind::Stack, "");
                for (i, child) in children.iter().enumerate() {
                    let widget = self.build_node(tree, *child, content, widgets)?;
                    widgets.append_child(container, widget);
                    widgets.set_presented(widget, i == *active);
                }
                container
            }
        };
        if !matches!(tree.parent_of(id).and_then(|p| tree.node(p)), Some(p) if p.is_stacked()) {
            widgets.set_presented(handle, true);
        }
        self.nodes.insert(id, handle);
        Ok(handle)
    }
}
