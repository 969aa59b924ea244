//! Action dispatch: routes resolved actions to the owning subsystem.

use lattice_common::{Action, ContentProvider, LatticeError, WidgetFactory};

use super::core::LatticeApp;

impl<C: ContentProvider, W: WidgetFactory> LatticeApp<C, W> {
    /// Dispatch a resolved [`Action`]. Boundary outcomes (nothing to the
    /// left, top of a stack) succeed silently.
    pub fn dispatch(&mut self, action: Action) -> Result<(), LatticeError> {
        tracing::debug!(action = action.label(), "dispatch");
        match action {
            // -- Tiling --
            Action::Split(direction) => {
                self.split(direction)?;
            }
            Action::ClosePane => {
                self.close_pane()?;
            }
            Action::AddToStack => {
                self.add_to_stack()?;
            }
            Action::NavigateStack(step) => {
                self.navigate_stack(step)?;
            }
            Action::Focus(direction) => {
                self.focus(direction)?;
            }
            Action::FocusNext => {
                self.focus_next()?;
            }
            Action::FocusPrev => {
                self.focus_prev()?;
            }
            Action::Resize { direction, steps } => {
                self.resize(direction, steps)?;
            }
            Action::SwapPane(direction) => {
                self.swap(direction)?;
            }
            Action::ConsumeOrExpel(direction) => {
                self.consume_or_expel(direction)?;
            }

            // -- Tabs --
            Action::NewTab => {
                self.new_tab()?;
            }
            Action::CloseTab => {
                let tab_id = self.active_tab_id()?;
                self.close_tab(&tab_id)?;
            }
            Action::NextTab => {
                self.next_tab();
            }
            Action::PrevTab => {
                self.prev_tab();
            }

            // -- Floating --
            Action::ToggleFloatingPane => {
                self.toggle_floating()?;
            }
            Action::OpenFloatingUrl(url) => {
                self.open_floating_url(&url)?;
            }
            Action::OpenFloatingProfile(name) => {
                self.open_floating_profile(&name)?;
            }
            Action::CloseFloatingPane => {
                self.hide_floating()?;
            }
            Action::ReleaseFloatingPane => {
                self.release_floating()?;
            }

            // -- Address bar --
            Action::ToggleOmnibox => {
                self.toggle_omnibox()?;
            }
            Action::Navigate(url) => {
                self.navigate(&url)?;
            }

            Action::None => {}
        }
        Ok(())
    }
}
