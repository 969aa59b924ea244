//! Directional neighbor selection over pane rects.

use std::cmp::Ordering;

use lattice_common::{Direction, PaneId};

use super::PaneRect;

struct Candidate<'a> {
    pane_id: &'a PaneId,
    perpendicular: f64,
    on_axis: f64,
}

impl Candidate<'_> {
    /// Most aligned first, then nearest, then by pane id so equal scores
    /// always resolve the same way.
    fn cmp(&self, other: &Self) -> Ordering {
        self.perpendicular
            .total_cmp(&other.perpendicular)
            .then(self.on_axis.total_cmp(&other.on_axis))
            .then_with(|| self.pane_id.cmp(other.pane_id))
    }
}

/// The neighbor of `active` in `direction`, or `None` when nothing lies on
/// that side (including when `active` has no rect).
///
/// A candidate qualifies when its center is strictly in the half-plane
/// `direction` points into, measured from the active center.
pub fn find_neighbor(active: &PaneId, rects: &[PaneRect], direction: Direction) -> Option<PaneId> {
    let origin = rects.iter().find(|r| &r.pane_id == active)?;
    let (ax, ay) = origin.center();

    let best = rects
        .iter()
        .filter(|r| &r.pane_id != active)
        .filter_map(|r| {
            let (cx, cy) = r.center();
            let (dx, dy) = (cx - ax, cy - ay);
            let (ahead, on_axis, perpendicular) = match direction {
                Direction::Left => (dx < 0.0, dx.abs(), dy.abs()),
                Direction::Right => (dx > 0.0, dx.abs(), dy.abs()),
                Direction::Up => (dy < 0.0, dy.abs(), dx.abs()),
                Direction::Down => (dy > 0.0, dy.abs(), dx.abs()),
            };
            ahead.then_some(Candidate {
                pane_id: &r.pane_id,
                perpendicular,
                on_axis,
            })
        })
        .min_by(|a, b| a.cmp(b))?;

    tracing::debug!(
        active = %active,
        target = %best.pane_id,
        direction = ?direction,
        perpendicular = best.perpendicular,
        on_axis = best.on_axis,
        "geometric neighbor"
    );
    Some(best.pane_id.clone())
}
