//! Tree mutations and focus movement on the active tab.
//!
//! New panes get their content surface before the tree changes, so a pool
//! failure never leaves a pane without content.

use lattice_common::{
    ContentProvider, Direction, Event, LatticeError, PaneId, StackStep, TabId, WidgetFactory,
};
use lattice_tiling::{
    CloseOutcome, ConsumeOutcome, GeometryProvider, NavOutcome, ResizeOutcome, StackMove,
    TilingError, TreeDelta,
};

use super::core::LatticeApp;

/// What a close did to the active tab.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseResult {
    Pane { closed: PaneId, next_active: PaneId },
    /// It was the tab's last pane, so the tab went instead.
    Tab(TabId),
    /// Last pane of the last tab.
    Nothing,
}

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    /// Split the active pane; the new pane opens on the `direction` side
    /// and takes focus.
    pub fn split(&mut self, direction: Direction) -> Result<PaneId, LatticeError> {
        let result = self.try_split(direction);
        let (tab_id, pane_id) = self.settle(result)?;
        self.publish_opened(&tab_id, &pane_id);
        Ok(pane_id)
    }

    fn try_split(&mut self, direction: Direction) -> Result<(TabId, PaneId), LatticeError> {
        let p = self.active_parts()?;
        let target = p.workspace.active_pane().clone();
        let pane = p.workspace.new_pane();
        let pane_id = pane.id.clone();

        if let Err(err) = p.view.ensure_content(&pane_id, p.content) {
            p.content.release(&pane_id);
            return Err(err.into());
        }
        let outcome = match p.workspace.split_with(&target, direction, pane) {
            Ok(outcome) => outcome,
            Err(err) => {
                p.view.forget(&pane_id, p.widgets);
                p.content.release(&pane_id);
                return Err(err.into());
            }
        };
        p.view
            .apply(&outcome.delta, p.workspace.tree(), p.content, p.widgets)?;
        Ok((p.tab_id, outcome.new_pane))
    }

    /// Open a new pane stacked on top of the active one.
    pub fn add_to_stack(&mut self) -> Result<PaneId, LatticeError> {
        let result = self.try_add_to_stack();
        let (tab_id, pane_id) = self.settle(result)?;
        self.publish_opened(&tab_id, &pane_id);
        Ok(pane_id)
    }

    fn try_add_to_stack(&mut self) -> Result<(TabId, PaneId), LatticeError> {
        let p = self.active_parts()?;
        let target = p.workspace.active_pane().clone();
        let pane = p.workspace.new_pane();
        let pane_id = pane.id.clone();

        if let Err(err) = p.view.ensure_content(&pane_id, p.content) {
            p.content.release(&pane_id);
            return Err(err.into());
        }
        let outcome = match p.workspace.add_to_stack_with(&target, pane) {
            Ok(outcome) => outcome,
            Err(err) => {
                p.view.forget(&pane_id, p.widgets);
                p.content.release(&pane_id);
                return Err(err.into());
            }
        };
        p.view
            .apply(&outcome.delta, p.workspace.tree(), p.content, p.widgets)?;
        Ok((p.tab_id, outcome.new_pane))
    }

    /// Close the active pane. Closing a tab's last pane closes the tab.
    pub fn close_pane(&mut self) -> Result<CloseResult, LatticeError> {
        let result = self.try_close_pane();
        match self.settle(result)? {
            Some((tab_id, closed, next_active)) => {
                self.event_bus.publish(Event::PaneClosed {
                    tab_id: tab_id.clone(),
                    pane_id: closed.clone(),
                });
                self.publish_focused(&tab_id, &next_active);
                Ok(CloseResult::Pane {
                    closed,
                    next_active,
                })
            }
            None => {
                let tab_id = self.active_tab_id()?;
                if self.close_tab(&tab_id)? {
                    Ok(CloseResult::Tab(tab_id))
                } else {
                    Ok(CloseResult::Nothing)
                }
            }
        }
    }

    fn try_close_pane(&mut self) -> Result<Option<(TabId, PaneId, PaneId)>, LatticeError> {
        let p = self.active_parts()?;
        let target = p.workspace.active_pane().clone();
        let CloseOutcome::Closed {
            pane,
            next_active,
            delta,
        } = p.workspace.close(&target)?
        else {
            return Ok(None);
        };
        p.view.forget(&pane.id, p.widgets);
        p.content.release(&pane.id);
        p.view.apply(&delta, p.workspace.tree(), p.content, p.widgets)?;
        Ok(Some((p.tab_id, pane.id, next_active)))
    }

    /// Step through the active pane's stack. `None` at either end or when
    /// the pane is not stacked.
    pub fn navigate_stack(&mut self, step: StackStep) -> Result<Option<PaneId>, LatticeError> {
        let result = self.try_navigate_stack(step);
        let moved = self.settle(result)?;
        if let Some((tab_id, pane)) = &moved {
            self.publish_focused(tab_id, pane);
        }
        Ok(moved.map(|(_, pane)| pane))
    }

    fn try_navigate_stack(&mut self, step: StackStep) -> Result<Option<(TabId, PaneId)>, LatticeError> {
        let p = self.active_parts()?;
        let active = p.workspace.active_pane().clone();
        let (pane, delta) = match p.workspace.navigate_stack(&active, step) {
            Ok(StackMove::Moved { pane, delta, .. }) => (pane, delta),
            Ok(StackMove::AtBoundary) | Err(TilingError::NotInStack(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        p.view.apply(&delta, p.workspace.tree(), p.content, p.widgets)?;
        Ok(Some((p.tab_id, pane)))
    }

    /// Directional focus. Uses the live widget geometry when it has been
    /// allocated, the headless layout otherwise, and the tree shape as a
    /// last resort.
    pub fn focus(&mut self, direction: Direction) -> Result<Option<PaneId>, LatticeError> {
        let result = self.try_focus(direction);
        let moved = self.settle(result)?;
        if let Some((tab_id, pane)) = &moved {
            self.publish_focused(tab_id, pane);
        }
        Ok(moved.map(|(_, pane)| pane))
    }

    fn try_focus(&mut self, direction: Direction) -> Result<Option<(TabId, PaneId)>, LatticeError> {
        let (layout, viewport) = (self.layout, self.viewport);
        let p = self.active_parts()?;

        let mut rects = p
            .view
            .geometry(p.workspace.tree(), &*p.widgets)
            .pane_rects();
        if rects.is_empty() {
            rects = layout.compute(p.workspace.tree(), viewport).pane_rects();
        }
        let outcome = if rects.is_empty() {
            p.workspace.navigate_structural(direction)?
        } else {
            p.workspace.navigate(direction, &rects)?
        };
        let NavOutcome::Moved { pane, delta } = outcome else {
            return Ok(None);
        };
        p.view.apply(&delta, p.workspace.tree(), p.content, p.widgets)?;
        Ok(Some((p.tab_id, pane)))
    }

    /// Focus a specific pane of the active tab, revealing it in its stack.
    pub fn focus_pane(&mut self, pane_id: &PaneId) -> Result<(), LatticeError> {
        let result = self.try_focus_pane(pane_id);
        let tab_id = self.settle(result)?;
        self.publish_focused(&tab_id, pane_id);
        Ok(())
    }

    fn try_focus_pane(&mut self, pane_id: &PaneId) -> Result<TabId, LatticeError> {
        let p = self.active_parts()?;
        let delta = p.workspace.focus(pane_id)?;
        p.view.apply(&delta, p.workspace.tree(), p.content, p.widgets)?;
        Ok(p.tab_id)
    }

    pub fn focus_next(&mut self) -> Result<Option<PaneId>, LatticeError> {
        self.cycle_focus(true)
    }

    pub fn focus_prev(&mut self) -> Result<Option<PaneId>, LatticeError> {
        self.cycle_focus(false)
    }

    fn cycle_focus(&mut self, forward: bool) -> Result<Option<PaneId>, LatticeError> {
        let p = self.active_parts()?;
        let next = if forward {
            p.workspace.focus_next()
        } else {
            p.workspace.focus_prev()
        };
        let tab_id = p.tab_id;
        if let Some(pane) = &next {
            self.publish_focused(&tab_id, pane);
        }
        Ok(next)
    }

    /// Move the divider next to the active pane by `steps` resize steps.
    pub fn resize(&mut self, direction: Direction, steps: i32) -> Result<ResizeOutcome, LatticeError> {
        let p = self.active_parts()?;
        let active = p.workspace.active_pane().clone();
        let outcome = p.workspace.resize(&active, direction, steps)?;
        let tab_id = p.tab_id;
        if let ResizeOutcome::Resized { .. } = outcome {
            self.state_changed(&tab_id);
        }
        Ok(outcome)
    }

    /// Trade places with the structural neighbor in `direction`.
    pub fn swap(&mut self, direction: Direction) -> Result<Option<PaneId>, LatticeError> {
        let result = self.try_swap(direction);
        let swapped = self.settle(result)?;
        if let Some((tab_id, _)) = &swapped {
            self.state_changed(tab_id);
        }
        Ok(swapped.map(|(_, other)| other))
    }

    fn try_swap(&mut self, direction: Direction) -> Result<Option<(TabId, PaneId)>, LatticeError> {
        let p = self.active_parts()?;
        let active = p.workspace.active_pane().clone();
        let Some(other) = p.workspace.swap(&active, direction)? else {
            return Ok(None);
        };
        p.view
            .apply(&TreeDelta::Restructured, p.workspace.tree(), p.content, p.widgets)?;
        Ok(Some((p.tab_id, other)))
    }

    /// Fold the active pane into the stack in `direction`, or pull it out
    /// of its own stack.
    pub fn consume_or_expel(&mut self, direction: Direction) -> Result<ConsumeOutcome, LatticeError> {
        let result = self.try_consume_or_expel(direction);
        let (tab_id, outcome) = self.settle(result)?;
        if outcome != ConsumeOutcome::Nothing {
            self.state_changed(&tab_id);
        }
        Ok(outcome)
    }

    fn try_consume_or_expel(&mut self, direction: Direction) -> Result<(TabId, ConsumeOutcome), LatticeError> {
        let p = self.active_parts()?;
        let active = p.workspace.active_pane().clone();
        let outcome = p.workspace.consume_or_expel(&active, direction)?;
        match &outcome {
            ConsumeOutcome::Consumed { delta, .. } | ConsumeOutcome::Expelled { delta } => {
                p.view.apply(delta, p.workspace.tree(), p.content, p.widgets)?;
            }
            ConsumeOutcome::Nothing => {}
        }
        Ok((p.tab_id, outcome))
    }

    fn publish_opened(&self, tab_id: &TabId, pane_id: &PaneId) {
        self.event_bus.publish(Event::PaneOpened {
            tab_id: tab_id.clone(),
            pane_id: pane_id.clone(),
        });
        self.publish_focused(tab_id, pane_id);
    }

    fn publish_focused(&self, tab_id: &TabId, pane_id: &PaneId) {
        self.event_bus.publish(Event::PaneFocused {
            tab_id: tab_id.clone(),
            pane_id: pane_id.clone(),
        });
        self.state_changed(tab_id);
    }
}

#[cfg(test)]
mod tests {
    use lattice_common::{Direction, Event, StackStep};
    use lattice_tiling::{ConsumeOutcome, ResizeOutcome};

    use super::super::test_support::{app_with_tab, HeadlessApp};
    use super::CloseResult;

    fn panes(app: &HeadlessApp) -> Vec<lattice_common::PaneId> {
        app.active_workspace().unwrap().tree().pane_ids()
    }

    fn assert_view_in_sync(app: &HeadlessApp) {
        let tab = app.tabs().active_id().unwrap();
        let view = app.view(tab).unwrap();
        let ws = app.active_workspace().unwrap();
        ws.validate().unwrap();
        for pane in ws.tree().pane_ids() {
            assert!(view.frame_for(&pane).is_some(), "no frame for {pane}");
            assert!(app.content().surface_for(&pane).is_some());
        }
    }

    #[test]
    fn split_acquires_content_and_focuses_new_pane() {
        let (mut app, tab) = app_with_tab();
        let mut rx = app.event_bus().subscribe();
        let new_pane = app.split(Direction::Right).unwrap();

        assert_eq!(app.active_workspace().unwrap().active_pane(), &new_pane);
        assert_eq!(panes(&app).len(), 2);
        assert_view_in_sync(&app);

        assert_eq!(
            rx.try_recv().unwrap(),
            Event::PaneOpened {
                tab_id: tab.clone(),
                pane_id: new_pane.clone()
            }
        );
        assert!(matches!(rx.try_recv().unwrap(), Event::PaneFocused { .. }));
        assert_eq!(rx.try_recv().unwrap(), Event::StateChanged { tab_id: tab });
    }

    #[test]
    fn split_failure_leaves_tree_untouched() {
        let (mut app, _) = app_with_tab();
        let before = panes(&app);
        app.content_mut().fail_next_acquire("pool exhausted");

        assert!(app.split(Direction::Down).is_err());
        assert_eq!(panes(&app), before);
        assert_eq!(app.content().live_surfaces(), 1);
        assert_eq!(app.notifications().len(), 1);
        assert_view_in_sync(&app);
    }

    #[test]
    fn close_pane_releases_its_surface() {
        let (mut app, _) = app_with_tab();
        let first = panes(&app)[0].clone();
        let second = app.split(Direction::Right).unwrap();

        let closed = app.close_pane().unwrap();
        assert_eq!(
            closed,
            CloseResult::Pane {
                closed: second.clone(),
                next_active: first.clone()
            }
        );
        assert!(app.content().surface_for(&second).is_none());
        assert_eq!(app.content().released(), &[second]);
        assert_eq!(panes(&app), vec![first]);
        assert_view_in_sync(&app);
    }

    #[test]
    fn closing_last_pane_closes_the_tab_unless_it_is_the_last() {
        let (mut app, first_tab) = app_with_tab();
        assert_eq!(app.close_pane().unwrap(), CloseResult::Nothing);

        let second_tab = app.new_tab().unwrap();
        assert_eq!(app.close_pane().unwrap(), CloseResult::Tab(second_tab));
        assert_eq!(app.tabs().active_id(), Some(&first_tab));
        assert_eq!(app.content().live_surfaces(), 1);
    }

    #[test]
    fn stack_navigation_stops_at_the_ends() {
        let (mut app, _) = app_with_tab();
        let first = panes(&app)[0].clone();
        let second = app.add_to_stack().unwrap();
        assert_view_in_sync(&app);

        assert_eq!(app.navigate_stack(StackStep::Down).unwrap(), None);
        assert_eq!(app.navigate_stack(StackStep::Up).unwrap(), Some(first.clone()));
        assert_eq!(app.navigate_stack(StackStep::Up).unwrap(), None);
        assert_eq!(app.navigate_stack(StackStep::Down).unwrap(), Some(second.clone()));

        let tab = app.tabs().active_id().unwrap();
        let view = app.view(tab).unwrap();
        let first_frame = view.frame_for(&first).unwrap();
        let second_frame = view.frame_for(&second).unwrap();
        assert!(!app.widgets().is_presented(first_frame));
        assert!(app.widgets().is_presented(second_frame));
    }

    #[test]
    fn stack_navigation_outside_a_stack_is_a_no_op() {
        let (mut app, _) = app_with_tab();
        app.split(Direction::Right).unwrap();
        assert_eq!(app.navigate_stack(StackStep::Up).unwrap(), None);
    }

    #[test]
    fn directional_focus_uses_headless_layout() {
        let (mut app, _) = app_with_tab();
        let left = panes(&app)[0].clone();
        let right = app.split(Direction::Right).unwrap();

        assert_eq!(app.focus(Direction::Left).unwrap(), Some(left.clone()));
        assert_eq!(app.focus(Direction::Left).unwrap(), None);
        assert_eq!(app.focus(Direction::Right).unwrap(), Some(right));
        assert_eq!(app.focus(Direction::Up).unwrap(), None);
    }

    #[test]
    fn directional_focus_falls_back_to_tree_shape() {
        let (mut app, _) = app_with_tab();
        app.set_viewport(0.0, 0.0);
        let top = panes(&app)[0].clone();
        app.split(Direction::Down).unwrap();
        assert_eq!(app.focus(Direction::Up).unwrap(), Some(top));
    }

    #[test]
    fn focus_cycles_and_focus_pane_reveals() {
        let (mut app, _) = app_with_tab();
        let first = panes(&app)[0].clone();
        let second = app.split(Direction::Right).unwrap();
        assert_eq!(app.focus_next().unwrap(), Some(first.clone()));
        assert_eq!(app.focus_prev().unwrap(), Some(second));

        let stacked = app.add_to_stack().unwrap();
        app.focus_pane(&first).unwrap();
        app.focus_pane(&stacked).unwrap();
        assert_eq!(app.active_workspace().unwrap().active_pane(), &stacked);
        assert!(app.focus_pane(&"missing".into()).is_err());
        assert_eq!(app.notifications().len(), 0);
    }

    #[test]
    fn resize_moves_the_divider() {
        let (mut app, _) = app_with_tab();
        assert_eq!(
            app.resize(Direction::Right, 1).unwrap(),
            ResizeOutcome::NothingToResize
        );
        app.split(Direction::Right).unwrap();
        match app.resize(Direction::Right, 1).unwrap() {
            ResizeOutcome::Resized { ratio, .. } => assert!((ratio - 0.55).abs() < 1e-9),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn swap_and_consume_restructure_the_view() {
        let (mut app, _) = app_with_tab();
        let left = panes(&app)[0].clone();
        let right = app.split(Direction::Right).unwrap();

        assert_eq!(app.swap(Direction::Left).unwrap(), Some(left.clone()));
        assert_eq!(panes(&app), vec![right.clone(), left]);
        assert_view_in_sync(&app);

        assert!(matches!(
            app.consume_or_expel(Direction::Right).unwrap(),
            ConsumeOutcome::Consumed { .. }
        ));
        let ws = app.active_workspace().unwrap();
        assert!(ws.tree().stack_of(&right).is_some());
        assert_view_in_sync(&app);
    }
}
