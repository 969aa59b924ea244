use serde::{Deserialize, Serialize};

use crate::types::Direction;

use super::StackStep;

/// Every user-triggerable layout action.
///
/// Shortcuts, the command palette, and the headless script driver all
/// resolve to an `Action`; the coordinator routes it to a subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "args", rename_all = "snake_case")]
pub enum Action {
    // -- Tiling --
    Split(Direction),
    ClosePane,
    AddToStack,
    NavigateStack(StackStep),
    Focus(Direction),
    FocusNext,
    FocusPrev,
    Resize { direction: Direction, steps: i32 },
    SwapPane(Direction),
    /// Fold the pane into the neighboring stack, or pull it out of its own.
    ConsumeOrExpel(Direction),

    // -- Tabs --
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,

    // -- Floating --
    ToggleFloatingPane,
    OpenFloatingUrl(String),
    OpenFloatingProfile(String),
    CloseFloatingPane,
    ReleaseFloatingPane,

    // -- Address bar --
    ToggleOmnibox,
    Navigate(String),

    // -- Noop --
    None,
}
