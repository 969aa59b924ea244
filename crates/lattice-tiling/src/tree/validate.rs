//! Structural invariant checks.

use std::collections::HashSet;

use super::{NodeId, NodeKind, PaneTree};
use crate::error::TilingError;

impl PaneTree {
    /// Check every structural invariant:
    /// a split has at least two children and a ratio in (0, 1);
    /// a stack has at least one child and an in-bounds active index;
    /// parent links mirror child lists; the pane index matches the leaves;
    /// no node is unreachable from the root.
    pub fn validate(&self) -> Result<(), TilingError> {
        let root = self
            .nodes
            .get(&self.root)
            .ok_or_else(|| TilingError::InvalidTree(format!("root {} missing", self.root)))?;
        if root.parent.is_some() {
            return Err(TilingError::InvalidTree("root has a parent".into()));
        }

        let mut seen = HashSet::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                return Err(TilingError::InvalidTree(format!("{id} reachable twice")));
            }
            let node = self
                .nodes
                .get(&id)
                .ok_or_else(|| TilingError::InvalidTree(format!("dangling child {id}")))?;
            match &node.kind {
                NodeKind::Leaf(pane) => {
                    if self.index.get(&pane.id) != Some(&id) {
                        return Err(TilingError::InvalidTree(format!(
                            "pane {} not indexed at {id}",
                            pane.id
                        )));
                    }
                }
                NodeKind::Split {
                    ratio, children, ..
                } => {
                    if children.len() < 2 {
                        return Err(TilingError::InvalidTree(format!(
                            "split {id} has {} children",
                            children.len()
                        )));
                    }
                    if !(*ratio > 0.0 && *ratio < 1.0) {
                        return Err(TilingError::InvalidTree(format!(
                            "split {id} ratio {ratio} out of (0, 1)"
                        )));
                    }
                }
                NodeKind::Stack { children, active } => {
                    if children.is_empty() {
                        return Err(TilingError::InvalidTree(format!("stack {id} is empty")));
                    }
                    if *active >= children.len() {
                        return Err(TilingError::InvalidTree(format!(
                            "stack {id} active index {active} out of {}",
                            children.len()
                        )));
                    }
                }
            }
            for child in node.children() {
                self.check_parent(*child, id)?;
                stack.push(*child);
            }
        }

        if seen.len() != self.nodes.len() {
            return Err(TilingError::InvalidTree(format!(
                "{} unreachable nodes",
                self.nodes.len() - seen.len()
            )));
        }
        let leaves = self.nodes.values().filter(|n| n.is_leaf()).count();
        if leaves != self.index.len() {
            return Err(TilingError::InvalidTree(format!(
                "index has {} panes, tree has {leaves}",
                self.index.len()
            )));
        }
        Ok(())
    }

    fn check_parent(&self, child: NodeId, parent: NodeId) -> Result<(), TilingError> {
        match self.nodes.get(&child) {
            Some(node) if node.parent == Some(parent) => Ok(()),
            Some(node) => Err(TilingError::InvalidTree(format!(
                "{child} points at {:?}, expected {parent}",
                node.parent
            ))),
            None => Err(TilingError::InvalidTree(format!("dangling child {child}"))),
        }
    }
}
