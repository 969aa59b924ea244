//! Focus state shared with the accent/hover subsystem.

use std::sync::{Mutex, MutexGuard};

use lattice_common::PaneId;

/// Active-pane override and hover lock, set while a floating session is
/// visible on the active tab.
///
/// Only touched from the UI loop, but read from several call sites, so the
/// fields sit behind mutex accessors.
#[derive(Debug, Default)]
pub struct FocusOverride {
    active: Mutex<Option<PaneId>>,
    hover_locked: Mutex<bool>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl FocusOverride {
    pub fn active_pane(&self) -> Option<PaneId> {
        lock(&self.active).clone()
    }

    pub fn set_active_pane(&self, pane_id: Option<PaneId>) {
        *lock(&self.active) = pane_id;
    }

    /// While locked, pointer hover must not move focus out of the overlay.
    pub fn hover_locked(&self) -> bool {
        *lock(&self.hover_locked)
    }

    pub fn set_hover_locked(&self, locked: bool) {
        *lock(&self.hover_locked) = locked;
    }

    /// Point focus at a floating pane, or release it back to the tiles.
    pub fn apply(&self, floating_pane: Option<PaneId>) {
        self.set_hover_locked(floating_pane.is_some());
        self.set_active_pane(floating_pane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_sets_and_clears_both_fields() {
        let focus = FocusOverride::default();
        assert!(focus.active_pane().is_none());
        assert!(!focus.hover_locked());

        focus.apply(Some(PaneId::from("floating-pane:t1:default")));
        assert_eq!(
            focus.active_pane(),
            Some(PaneId::from("floating-pane:t1:default"))
        );
        assert!(focus.hover_locked());

        focus.apply(None);
        assert!(focus.active_pane().is_none());
        assert!(!focus.hover_locked());
    }
}
