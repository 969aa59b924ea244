//! Floating-pane shortcuts from the `[workspace.floating_pane]` config.

use lattice_common::{Action, ContentProvider, WidgetFactory};
use lattice_config::keys::normalize;

use super::core::LatticeApp;

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    /// Resolve a key combination to the floating action it is bound to.
    pub fn action_for_key(&self, binding: &str) -> Option<Action> {
        let floating = &self.config.workspace.floating_pane;
        let wanted = normalize(binding);
        if floating.toggle_keys.iter().any(|k| normalize(k) == wanted) {
            return Some(Action::ToggleFloatingPane);
        }
        floating
            .profile_for_key(binding)
            .map(|(name, _)| Action::OpenFloatingProfile(name.to_string()))
    }
}
