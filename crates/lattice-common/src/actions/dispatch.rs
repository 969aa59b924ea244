use crate::types::Direction;

use super::{Action, StackStep};

impl Action {
    /// Human-readable label for display in the command palette.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Split(Direction::Left) => "Split Left",
            Action::Split(Direction::Right) => "Split Right",
            Action::Split(Direction::Up) => "Split Up",
            Action::Split(Direction::Down) => "Split Down",
            Action::ClosePane => "Close Pane",
            Action::AddToStack => "Stack Pane",
            Action::NavigateStack(StackStep::Up) => "Previous Stacked Pane",
            Action::NavigateStack(StackStep::Down) => "Next Stacked Pane",
            Action::Focus(Direction::Left) => "Focus Left",
            Action::Focus(Direction::Right) => "Focus Right",
            Action::Focus(Direction::Up) => "Focus Up",
            Action::Focus(Direction::Down) => "Focus Down",
            Action::FocusNext => "Focus Next Pane",
            Action::FocusPrev => "Focus Previous Pane",
            Action::Resize { .. } => "Resize Pane",
            Action::SwapPane(_) => "Swap Pane",
            Action::ConsumeOrExpel(_) => "Consume or Expel Pane",
            Action::NewTab => "New Tab",
            Action::CloseTab => "Close Tab",
            Action::NextTab => "Next Tab",
            Action::PrevTab => "Previous Tab",
            Action::ToggleFloatingPane => "Toggle Floating Pane",
            Action::OpenFloatingUrl(_) => "Open URL in Floating Pane",
            Action::OpenFloatingProfile(_) => "Open Floating Profile",
            Action::CloseFloatingPane => "Hide Floating Pane",
            Action::ReleaseFloatingPane => "Close Floating Pane",
            Action::ToggleOmnibox => "Toggle Address Bar",
            Action::Navigate(_) => "Navigate",
            Action::None => "None",
        }
    }

    /// Whether the action rewrites the pane tree of the active tab.
    pub fn mutates_tree(&self) -> bool {
        matches!(
            self,
            Action::Split(_)
                | Action::ClosePane
                | Action::AddToStack
                | Action::NavigateStack(_)
                | Action::Resize { .. }
                | Action::SwapPane(_)
                | Action::ConsumeOrExpel(_)
        )
    }

    /// All actions that should appear in the command palette.
    pub fn palette_actions() -> Vec<Action> {
        let mut actions: Vec<Action> = Direction::ALL.into_iter().map(Action::Split).collect();
        actions.extend([
            Action::ClosePane,
            Action::AddToStack,
            Action::NavigateStack(StackStep::Up),
            Action::NavigateStack(StackStep::Down),
        ]);
        actions.extend(Direction::ALL.into_iter().map(Action::Focus));
        actions.extend([
            Action::FocusNext,
            Action::FocusPrev,
            Action::NewTab,
            Action::CloseTab,
            Action::ToggleFloatingPane,
            Action::CloseFloatingPane,
            Action::ToggleOmnibox,
        ]);
        actions
    }
}
