//! Layout calculation: recursive tree-to-rect computation.

use lattice_common::{Orientation, Rect, WidgetHandle};

use super::{LayoutEngine, LayoutSnapshot};
use crate::tree::{NodeId, NodeKind, PaneTree};

impl LayoutEngine {
    pub fn compute(&self, tree: &PaneTree, viewport: Rect) -> LayoutSnapshot {
        let pad = f64::from(self.outer_padding);
        let bounds = Rect::new(
            viewport.x + pad,
            viewport.y + pad,
            (viewport.width - 2.0 * pad).max(0.0),
            (viewport.height - 2.0 * pad).max(0.0),
        );
        let mut out = LayoutSnapshot::default();
        self.layout_node(tree, tree.root(), bounds, None, &mut out);
        out
    }

    /// Child rects for a split. Two children honor `ratio`; wider splits
    /// share the space equally.
    pub fn split_rects(&self, bounds: Rect, orientation: Orientation, ratio: f64, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let gap = f64::from(self.gap);
        let extent = match orientation {
            Orientation::Horizontal => bounds.width,
            Orientation::Vertical => bounds.height,
        };
        let available = (extent - gap * (count - 1) as f64).max(0.0);
        let shares: Vec<f64> = if count == 2 {
            let first = available * ratio;
            vec![first, (available - first).max(0.0)]
        } else {
            vec![available / count as f64; count]
        };

        let mut offset = 0.0;
        shares
            .into_iter()
            .map(|share| {
                let rect = match orientation {
                    Orientation::Horizontal => {
                        Rect::new(bounds.x + offset, bounds.y, share, bounds.height)
                    }
                    Orientation::Vertical => Rect::new(bounds.x, bounds.y + offset, bounds.width, share),
                };
                offset += share + gap;
                rect
            })
            .collect()
    }

    fn layout_node(
        &self,
        tree: &PaneTree,
        id: NodeId,
        bounds: Rect,
        stack_container: Option<WidgetHandle>,
        out: &mut LayoutSnapshot,
    ) {
        let Some(node) = tree.node(id) else {
            return;
        };
        match node.kind() {
            NodeKind::Leaf(pane) => {
                let handle = out.mint(bounds);
                out.visible.push(pane.id.clone());
                out.leaves.insert(pane.id.clone(), handle);
                if let Some(container) = stack_container {
                    out.stacks.insert(pane.id.clone(), container);
                }
            }
            NodeKind::Split {
                orientation,
                ratio,
                children,
            } => {
                let rects = self.split_rects(bounds, *orientation, *ratio, children.len());
                for (child, rect) in children.iter().zip(rects) {
                    self.layout_node(tree, *child, rect, None, out);
                }
            }
            NodeKind::Stack { children, active } => {
                let container = out.mint(bounds);
                if let Some(child) = children.get(*active) {
                    self.layout_node(tree, *child, bounds, Some(container), out);
                }
            }
        }
    }
}
