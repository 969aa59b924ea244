//! Pane stacking: several panes sharing one tree position, one visible.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use crate::pane::Pane;
    use crate::tree::{NodeSnapshot, PaneTree};
    use lattice_common::{Orientation, PaneId, StackStep};

    fn pane(id: &str) -> Pane {
        Pane::blank(PaneId::from(id))
    }

    /// `[a | stack(s0, s1, s2) active=active]`
    fn with_stack(active: usize) -> PaneTree {
        PaneTree::from_snapshot(&NodeSnapshot::split(
            Orientation::Horizontal,
            vec![
                NodeSnapshot::leaf(pane("a")),
                NodeSnapshot::stack(
                    active,
                    vec![
                        NodeSnapshot::leaf(pane("s0")),
                        NodeSnapshot::leaf(pane("s1")),
                        NodeSnapshot::leaf(pane("s2")),
                    ],
                ),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn view_reports_members_and_active() {
        let tree = with_stack(1);
        let stack = tree.stack_of(&PaneId::from("s0")).unwrap();
        let view = tree.stack(stack).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.active_index(), 1);
        assert_eq!(view.active_pane(), Some(PaneId::from("s1")));
        assert_eq!(view.position_of(&PaneId::from("s2")), Some(2));
        assert_eq!(view.position_of(&PaneId::from("a")), None);
        assert!(tree.stack(tree.node_of(&PaneId::from("a")).unwrap()).is_none());
    }

    #[test]
    fn push_appends_and_activates() {
        let mut tree = with_stack(0);
        let stack = tree.stack_of(&PaneId::from("s0")).unwrap();
        let (_, index) = tree.push_to_stack(stack, pane("s3")).unwrap();
        assert_eq!(index, 3);
        let view = tree.stack(stack).unwrap();
        assert_eq!(view.active_pane(), Some(PaneId::from("s3")));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn push_rejects_duplicate_pane() {
        let mut tree = with_stack(0);
        let stack = tree.stack_of(&PaneId::from("s0")).unwrap();
        assert!(tree.push_to_stack(stack, pane("a")).is_err());
        assert_eq!(tree.stack(stack).unwrap().len(), 3);
    }

    #[test]
    fn step_clamps_at_both_edges() {
        let mut tree = with_stack(0);
        let stack = tree.stack_of(&PaneId::from("s0")).unwrap();
        assert_eq!(tree.step_stack(stack, StackStep::Up).unwrap(), None);
        assert_eq!(tree.step_stack(stack, StackStep::Down).unwrap(), Some(1));
        assert_eq!(tree.step_stack(stack, StackStep::Down).unwrap(), Some(2));
        assert_eq!(tree.step_stack(stack, StackStep::Down).unwrap(), None);
        assert_eq!(tree.stack(stack).unwrap().active_index(), 2);
    }

    #[test]
    fn reveal_switches_active_member() {
        let mut tree = with_stack(0);
        let changed = tree.reveal_in_stack(&PaneId::from("s2")).unwrap();
        let stack = tree.stack_of(&PaneId::from("s2")).unwrap();
        assert_eq!(changed, Some((stack, 2)));
        assert_eq!(tree.reveal_in_stack(&PaneId::from("s2")).unwrap(), None);
        assert_eq!(tree.reveal_in_stack(&PaneId::from("a")).unwrap(), None);
        assert_eq!(tree.visible_pane_ids(), vec![PaneId::from("a"), PaneId::from("s2")]);
    }

    #[test]
    fn detach_keeps_visible_member_when_earlier_member_leaves() {
        let mut tree = with_stack(2);
        let s0 = tree.node_of(&PaneId::from("s0")).unwrap();
        let stack = tree.stack_of(&PaneId::from("s0")).unwrap();
        tree.detach(s0).unwrap();
        tree.remove_leaf(s0);
        let view = tree.stack(stack).unwrap();
        assert_eq!(view.active_index(), 1);
        assert_eq!(view.active_pane(), Some(PaneId::from("s2")));
    }

    #[test]
    fn detach_active_last_member_falls_back_to_previous() {
        let mut tree = with_stack(2);
        let s2 = tree.node_of(&PaneId::from("s2")).unwrap();
        let stack = tree.stack_of(&PaneId::from("s2")).unwrap();
        tree.detach(s2).unwrap();
        tree.remove_leaf(s2);
        assert_eq!(
            tree.stack(stack).unwrap().active_pane(),
            Some(PaneId::from("s1"))
        );
        assert!(tree.validate().is_ok());
    }
}
