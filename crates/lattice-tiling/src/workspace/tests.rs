use lattice_common::{Direction, Orientation, PaneId, Rect, StackStep};

use super::*;
use crate::error::TilingError;
use crate::navigation::PaneRect;
use crate::pane::Pane;
use crate::tree::{NodeKind, NodeSnapshot, PaneTree};

fn id(s: &str) -> PaneId {
    PaneId::from(s)
}

fn pane(s: &str) -> Pane {
    Pane::blank(id(s))
}

fn single(s: &str) -> Workspace {
    Workspace::new(pane(s), WorkspaceSettings::default())
}

fn from(snapshot: NodeSnapshot, active: &str) -> Workspace {
    let tree = PaneTree::from_snapshot(&snapshot).unwrap();
    Workspace::from_tree(tree, id(active), WorkspaceSettings::default()).unwrap()
}

/// `[a | [b / c]]`
fn three_panes(active: &str) -> Workspace {
    from(
        NodeSnapshot::split(
            Orientation::Horizontal,
            vec![
                NodeSnapshot::leaf(pane("a")),
                NodeSnapshot::split(
                    Orientation::Vertical,
                    vec![NodeSnapshot::leaf(pane("b")), NodeSnapshot::leaf(pane("c"))],
                ),
            ],
        ),
        active,
    )
}

/// `[a | stack(s0, s1, s2)]`
fn with_stack(stack_active: usize, active: &str) -> Workspace {
    from(
        NodeSnapshot::split(
            Orientation::Horizontal,
            vec![
                NodeSnapshot::leaf(pane("a")),
                NodeSnapshot::stack(
                    stack_active,
                    vec![
                        NodeSnapshot::leaf(pane("s0")),
                        NodeSnapshot::leaf(pane("s1")),
                        NodeSnapshot::leaf(pane("s2")),
                    ],
                ),
            ],
        ),
        active,
    )
}

fn root_kind(ws: &Workspace) -> &NodeKind {
    ws.tree().node(ws.tree().root()).unwrap().kind()
}

// -- Split --

#[test]
fn split_right_places_new_pane_second_and_activates_it() {
    let mut ws = single("a");
    let out = ws.split_with(&id("a"), Direction::Right, pane("b")).unwrap();
    assert_eq!(out.new_pane, id("b"));
    assert_eq!(out.delta, TreeDelta::Restructured);
    assert_eq!(ws.active_pane(), &id("b"));
    assert_eq!(ws.tree().pane_ids(), vec![id("a"), id("b")]);
    match root_kind(&ws) {
        NodeKind::Split {
            orientation, ratio, ..
        } => {
            assert_eq!(*orientation, Orientation::Horizontal);
            assert_eq!(*ratio, 0.5);
        }
        other => panic!("expected split, got {other:?}"),
    }
    ws.validate().unwrap();
}

#[test]
fn split_left_and_up_place_new_pane_first() {
    let mut ws = single("a");
    ws.split_with(&id("a"), Direction::Left, pane("l")).unwrap();
    assert_eq!(ws.tree().pane_ids(), vec![id("l"), id("a")]);

    ws.split_with(&id("a"), Direction::Up, pane("u")).unwrap();
    assert_eq!(ws.tree().pane_ids(), vec![id("l"), id("u"), id("a")]);
    ws.validate().unwrap();
}

#[test]
fn split_generates_blank_pane_with_configured_url() {
    let settings = WorkspaceSettings {
        new_pane_url: "https://start.test".into(),
        ..WorkspaceSettings::default()
    };
    let mut ws = Workspace::new(pane("a"), settings);
    let out = ws.split(&id("a"), Direction::Down).unwrap();
    assert_ne!(out.new_pane, id("a"));
    assert_eq!(ws.tree().pane(&out.new_pane).unwrap().uri, "https://start.test");
}

#[test]
fn split_unknown_target_leaves_tree_untouched() {
    let mut ws = three_panes("a");
    let before = ws.tree().snapshot();
    let err = ws.split(&id("zz"), Direction::Right).unwrap_err();
    assert_eq!(err, TilingError::PaneNotFound(id("zz")));
    assert_eq!(ws.tree().snapshot(), before);
    assert_eq!(ws.active_pane(), &id("a"));
}

#[test]
fn split_with_existing_pane_id_is_rejected() {
    let mut ws = three_panes("a");
    let before = ws.tree().snapshot();
    let err = ws.split_with(&id("a"), Direction::Right, pane("c")).unwrap_err();
    assert_eq!(err, TilingError::DuplicatePane(id("c")));
    assert_eq!(ws.tree().snapshot(), before);
}

#[test]
fn split_inside_stack_splits_around_the_stack() {
    let mut ws = with_stack(1, "s1");
    ws.split_with(&id("s1"), Direction::Down, pane("n")).unwrap();
    let stack = ws.tree().stack_of(&id("s0")).unwrap();
    assert_eq!(ws.tree().stack(stack).unwrap().len(), 3);
    assert!(ws.tree().stack_of(&id("n")).is_none());
    let split = ws.tree().parent_of(stack).unwrap();
    assert!(matches!(
        ws.tree().node(split).unwrap().kind(),
        NodeKind::Split {
            orientation: Orientation::Vertical,
            ..
        }
    ));
    ws.validate().unwrap();
}

// -- Close --

#[test]
fn close_promotes_sibling_subtree_unchanged() {
    let mut ws = three_panes("a");
    let sibling = match ws.tree().snapshot() {
        NodeSnapshot::Split { children, .. } => children[1].clone(),
        other => panic!("unexpected root {other:?}"),
    };
    let out = ws.close(&id("a")).unwrap();
    match out {
        CloseOutcome::Closed {
            pane,
            next_active,
            delta,
        } => {
            assert_eq!(pane.id, id("a"));
            assert_eq!(next_active, id("b"));
            assert_eq!(delta, TreeDelta::Restructured);
        }
        CloseOutcome::LastPane => panic!("should close"),
    }
    assert_eq!(ws.tree().snapshot(), sibling);
    assert_eq!(ws.active_pane(), &id("b"));
    ws.validate().unwrap();
}

#[test]
fn close_last_pane_is_refused() {
    let mut ws = single("a");
    assert_eq!(ws.close(&id("a")).unwrap(), CloseOutcome::LastPane);
    assert_eq!(ws.pane_count(), 1);
}

#[test]
fn close_unknown_pane_is_an_error() {
    let mut ws = three_panes("a");
    assert_eq!(
        ws.close(&id("zz")).unwrap_err(),
        TilingError::PaneNotFound(id("zz"))
    );
    assert_eq!(ws.pane_count(), 3);
}

#[test]
fn close_inactive_pane_keeps_focus() {
    let mut ws = three_panes("a");
    let out = ws.close(&id("c")).unwrap();
    assert!(matches!(out, CloseOutcome::Closed { ref next_active, .. } if *next_active == id("a")));
    assert_eq!(ws.active_pane(), &id("a"));
    assert_eq!(ws.tree().pane_ids(), vec![id("a"), id("b")]);
}

#[test]
fn close_in_large_stack_removes_member_and_activates_neighbor() {
    let mut ws = with_stack(2, "s2");
    let out = ws.close(&id("s2")).unwrap();
    let stack = ws.tree().stack_of(&id("s0")).unwrap();
    match out {
        CloseOutcome::Closed {
            next_active, delta, ..
        } => {
            assert_eq!(next_active, id("s1"));
            assert_eq!(
                delta,
                TreeDelta::StackMemberRemoved {
                    stack,
                    pane: id("s2")
                }
            );
        }
        CloseOutcome::LastPane => panic!("should close"),
    }
    let view = ws.tree().stack(stack).unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(view.active_index(), 1);
    ws.validate().unwrap();
}

#[test]
fn close_before_active_member_keeps_same_member_visible() {
    let mut ws = with_stack(2, "a");
    ws.close(&id("s0")).unwrap();
    let stack = ws.tree().stack_of(&id("s2")).unwrap();
    let view = ws.tree().stack(stack).unwrap();
    assert_eq!(view.active_pane(), Some(id("s2")));
    assert_eq!(view.active_index(), 1);
}

#[test]
fn close_in_two_member_stack_dissolves_it() {
    let mut ws = from(
        NodeSnapshot::split(
            Orientation::Horizontal,
            vec![
                NodeSnapshot::leaf(pane("a")),
                NodeSnapshot::stack(
                    1,
                    vec![NodeSnapshot::leaf(pane("s0")), NodeSnapshot::leaf(pane("s1"))],
                ),
            ],
        ),
        "s1",
    );
    let out = ws.close(&id("s1")).unwrap();
    assert!(matches!(
        out,
        CloseOutcome::Closed { ref next_active, delta: TreeDelta::Restructured, .. } if *next_active == id("s0")
    ));
    assert!(ws.tree().stack_of(&id("s0")).is_none());
    assert_eq!(ws.tree().pane_ids(), vec![id("a"), id("s0")]);
    ws.validate().unwrap();
}

#[test]
fn close_single_member_stack_takes_the_stack_with_it() {
    let mut ws = from(
        NodeSnapshot::split(
            Orientation::Horizontal,
            vec![
                NodeSnapshot::leaf(pane("a")),
                NodeSnapshot::stack(0, vec![NodeSnapshot::leaf(pane("s0"))]),
            ],
        ),
        "s0",
    );
    ws.close(&id("s0")).unwrap();
    assert_eq!(ws.tree().node_count(), 1);
    assert_eq!(ws.active_pane(), &id("a"));
    ws.validate().unwrap();
}

#[test]
fn close_in_wide_split_activates_next_child() {
    let mut ws = from(
        NodeSnapshot::split(
            Orientation::Horizontal,
            vec![
                NodeSnapshot::leaf(pane("a")),
                NodeSnapshot::leaf(pane("b")),
                NodeSnapshot::leaf(pane("c")),
            ],
        ),
        "b",
    );
    ws.close(&id("b")).unwrap();
    assert_eq!(ws.active_pane(), &id("c"));
    ws.close(&id("c")).unwrap();
    assert_eq!(ws.active_pane(), &id("a"));
}

#[test]
fn split_close_sequences_keep_invariants() {
    // Deterministic pseudo-random walk over split/stack/close.
    let mut ws = single("p0");
    let mut seed: u64 = 0x5eed;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };
    for step in 0..300 {
        let ids = ws.tree().pane_ids();
        let target = ids[next() % ids.len()].clone();
        let name = format!("p{}", step + 1);
        match next() % 5 {
            0 | 1 => {
                let dir = Direction::ALL[next() % 4];
                ws.split_with(&target, dir, pane(&name)).unwrap();
            }
            2 => {
                ws.add_to_stack_with(&target, pane(&name)).unwrap();
            }
            _ => {
                ws.close(&target).unwrap();
            }
        }
        ws.validate().unwrap_or_else(|e| panic!("step {step}: {e}"));
        assert!(ws.tree().contains_pane(ws.active_pane()));
    }
}

// -- Stacks --

#[test]
fn add_to_stack_wraps_target_and_preserves_it() {
    let mut ws = single("a");
    ws.update_pane(&id("a"), "https://a.test", Some("A".into())).unwrap();
    let out = ws.add_to_stack_with(&id("a"), pane("b")).unwrap();
    assert_eq!(out.index, 1);
    assert_eq!(out.delta, TreeDelta::Restructured);
    assert_eq!(ws.active_pane(), &id("b"));

    let view = ws.tree().stack(out.stack).unwrap();
    assert_eq!(view.pane_ids(), vec![id("a"), id("b")]);
    assert_eq!(view.active_index(), 1);
    let a = ws.tree().pane(&id("a")).unwrap();
    assert_eq!(a.uri, "https://a.test");
    assert_eq!(a.title, "A");
    ws.validate().unwrap();
}

#[test]
fn add_to_existing_stack_appends() {
    let mut ws = with_stack(0, "s0");
    let stack = ws.tree().stack_of(&id("s0")).unwrap();
    let out = ws.add_to_stack_with(&id("s0"), pane("s3")).unwrap();
    assert_eq!(
        out.delta,
        TreeDelta::StackMemberAdded {
            stack,
            pane: id("s3"),
            index: 3
        }
    );
    assert_eq!(ws.tree().stack(stack).unwrap().active_index(), 3);
}

#[test]
fn navigate_stack_clamps_at_edges() {
    let mut ws = with_stack(0, "s0");
    assert_eq!(
        ws.navigate_stack(&id("s0"), StackStep::Up).unwrap(),
        StackMove::AtBoundary
    );
    assert_eq!(ws.active_pane(), &id("s0"));

    let moved = ws.navigate_stack(&id("s0"), StackStep::Down).unwrap();
    assert!(matches!(moved, StackMove::Moved { ref pane, index: 1, .. } if *pane == id("s1")));
    ws.navigate_stack(&id("s1"), StackStep::Down).unwrap();
    assert_eq!(
        ws.navigate_stack(&id("s2"), StackStep::Down).unwrap(),
        StackMove::AtBoundary
    );
    assert_eq!(ws.active_pane(), &id("s2"));
}

#[test]
fn navigate_stack_outside_stack_is_misuse() {
    let mut ws = with_stack(0, "a");
    assert_eq!(
        ws.navigate_stack(&id("a"), StackStep::Down).unwrap_err(),
        TilingError::NotInStack(id("a"))
    );
}

// -- Focus & navigation --

/// Rects for `[a | stack]` in a 200x100 viewport.
fn stack_rects(visible_member: &str) -> Vec<PaneRect> {
    vec![
        PaneRect::new(id("a"), Rect::new(0.0, 0.0, 100.0, 100.0)),
        PaneRect::new(id(visible_member), Rect::new(100.0, 0.0, 100.0, 100.0)),
    ]
}

#[test]
fn vertical_navigation_moves_within_stack_first() {
    let mut ws = with_stack(0, "s0");
    let out = ws.navigate(Direction::Down, &stack_rects("s0")).unwrap();
    assert!(matches!(out, NavOutcome::Moved { ref pane, .. } if *pane == id("s1")));
}

#[test]
fn vertical_navigation_at_stack_edge_falls_through_to_geometry() {
    let mut ws = with_stack(0, "s0");
    assert_eq!(
        ws.navigate(Direction::Up, &stack_rects("s0")).unwrap(),
        NavOutcome::NoTarget
    );
    assert_eq!(ws.active_pane(), &id("s0"));
}

#[test]
fn geometric_navigation_into_stack_syncs_stack_index() {
    let mut ws = with_stack(2, "a");
    let out = ws.navigate(Direction::Right, &stack_rects("s2")).unwrap();
    assert!(matches!(out, NavOutcome::Moved { ref pane, delta: TreeDelta::Unchanged } if *pane == id("s2")));
    assert_eq!(ws.active_pane(), &id("s2"));
}

#[test]
fn focus_hidden_stack_member_reveals_it() {
    let mut ws = with_stack(0, "a");
    let stack = ws.tree().stack_of(&id("s2")).unwrap();
    let delta = ws.focus(&id("s2")).unwrap();
    assert_eq!(delta, TreeDelta::StackActiveChanged { stack, index: 2 });
    assert_eq!(ws.tree().stack(stack).unwrap().active_index(), 2);
    assert_eq!(ws.tree().visible_pane_ids(), vec![id("a"), id("s2")]);
}

#[test]
fn structural_navigation_without_geometry() {
    let mut ws = three_panes("a");
    assert!(matches!(
        ws.navigate_structural(Direction::Right).unwrap(),
        NavOutcome::Moved { ref pane, .. } if *pane == id("b")
    ));
    assert!(matches!(
        ws.navigate_structural(Direction::Down).unwrap(),
        NavOutcome::Moved { ref pane, .. } if *pane == id("c")
    ));
    assert!(matches!(
        ws.navigate_structural(Direction::Left).unwrap(),
        NavOutcome::Moved { ref pane, .. } if *pane == id("a")
    ));
    assert_eq!(
        ws.navigate_structural(Direction::Left).unwrap(),
        NavOutcome::NoTarget
    );
}

#[test]
fn focus_next_and_prev_wrap() {
    let mut ws = three_panes("c");
    assert_eq!(ws.focus_next(), Some(id("a")));
    assert_eq!(ws.focus_prev(), Some(id("c")));
    let mut lone = single("x");
    assert_eq!(lone.focus_next(), None);
}

// -- Resize, swap, consume/expel --

#[test]
fn resize_moves_nearest_matching_divider() {
    let mut ws = three_panes("b");
    match ws.resize(&id("b"), Direction::Down, 2).unwrap() {
        ResizeOutcome::Resized { ratio, .. } => assert_eq!(ratio, 0.6),
        other => panic!("unexpected {other:?}"),
    }
    match ws.resize(&id("b"), Direction::Left, 1).unwrap() {
        ResizeOutcome::Resized { split, ratio } => {
            assert_eq!(split, ws.tree().root());
            assert_eq!(ratio, 0.45);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn resize_clamps_to_minimum_share() {
    let mut ws = three_panes("a");
    match ws.resize(&id("a"), Direction::Right, 100).unwrap() {
        ResizeOutcome::Resized { ratio, .. } => assert_eq!(ratio, 0.9),
        other => panic!("unexpected {other:?}"),
    }
    match ws.resize(&id("a"), Direction::Left, 100).unwrap() {
        ResizeOutcome::Resized { ratio, .. } => assert_eq!(ratio, 0.1),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn resize_without_matching_split_is_noop() {
    let mut ws = three_panes("a");
    assert_eq!(
        ws.resize(&id("a"), Direction::Up, 1).unwrap(),
        ResizeOutcome::NothingToResize
    );
}

#[test]
fn set_split_ratio_clamps_and_rejects_leaves() {
    let mut ws = three_panes("a");
    let root = ws.tree().root();
    assert_eq!(ws.set_split_ratio(root, 0.333).unwrap(), 0.33);
    assert_eq!(ws.set_split_ratio(root, 0.99).unwrap(), 0.9);
    let leaf = ws.tree().node_of(&id("a")).unwrap();
    assert_eq!(
        ws.set_split_ratio(leaf, 0.5).unwrap_err(),
        TilingError::NotASplit(leaf)
    );
}

#[test]
fn swap_exchanges_positions_and_keeps_focus() {
    let mut ws = three_panes("a");
    assert_eq!(ws.swap(&id("a"), Direction::Right).unwrap(), Some(id("b")));
    assert_eq!(ws.tree().pane_ids(), vec![id("b"), id("a"), id("c")]);
    assert_eq!(ws.active_pane(), &id("a"));
    assert_eq!(ws.swap(&id("b"), Direction::Left).unwrap(), None);
}

#[test]
fn consume_folds_pane_into_neighbor_stack() {
    let mut ws = with_stack(0, "a");
    let stack = ws.tree().stack_of(&id("s0")).unwrap();
    let out = ws.consume_or_expel(&id("a"), Direction::Right).unwrap();
    assert!(matches!(out, ConsumeOutcome::Consumed { stack: s, .. } if s == stack));
    assert_eq!(ws.tree().root(), stack);
    assert_eq!(ws.tree().stack(stack).unwrap().len(), 4);
    assert_eq!(ws.active_pane(), &id("a"));
    ws.validate().unwrap();
}

#[test]
fn consume_into_leaf_creates_stack() {
    let mut ws = three_panes("a");
    ws.consume_or_expel(&id("a"), Direction::Right).unwrap();
    let stack = ws.tree().stack_of(&id("a")).unwrap();
    assert_eq!(ws.tree().stack(stack).unwrap().pane_ids(), vec![id("b"), id("a")]);
    ws.validate().unwrap();
}

#[test]
fn expel_moves_pane_beside_its_stack() {
    let mut ws = with_stack(1, "s1");
    let out = ws.consume_or_expel(&id("s1"), Direction::Down).unwrap();
    assert!(matches!(out, ConsumeOutcome::Expelled { .. }));
    assert!(ws.tree().stack_of(&id("s1")).is_none());
    let stack = ws.tree().stack_of(&id("s0")).unwrap();
    assert_eq!(ws.tree().stack(stack).unwrap().len(), 2);
    assert_eq!(ws.tree().pane_ids(), vec![id("a"), id("s0"), id("s2"), id("s1")]);
    ws.validate().unwrap();
}

#[test]
fn consume_with_nothing_adjacent_is_noop() {
    let mut ws = single("a");
    assert_eq!(
        ws.consume_or_expel(&id("a"), Direction::Left).unwrap(),
        ConsumeOutcome::Nothing
    );
}

#[test]
fn from_tree_requires_active_pane_in_tree() {
    let tree = PaneTree::new(pane("a"));
    assert!(Workspace::from_tree(tree, id("b"), WorkspaceSettings::default()).is_err());
}
