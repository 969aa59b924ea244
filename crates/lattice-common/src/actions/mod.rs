use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// One step of linear movement inside a pane stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackStep {
    /// Toward index 0.
    Up,
    /// Toward the last member.
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn all_palette_actions_have_labels() {
        for action in Action::palette_actions() {
            let label = action.label();
            assert!(!label.is_empty(), "action {:?} has empty label", action);
            assert_ne!(label, "None");
        }
    }

    #[test]
    fn palette_has_every_split_and_focus_direction() {
        let actions = Action::palette_actions();
        for dir in Direction::ALL {
            assert!(actions.contains(&Action::Split(dir)));
            assert!(actions.contains(&Action::Focus(dir)));
        }
    }

    #[test]
    fn split_labels() {
        assert_eq!(Action::Split(Direction::Left).label(), "Split Left");
        assert_eq!(Action::Split(Direction::Down).label(), "Split Down");
    }

    #[test]
    fn tree_mutating_actions() {
        assert!(Action::Split(Direction::Up).mutates_tree());
        assert!(Action::AddToStack.mutates_tree());
        assert!(Action::SwapPane(Direction::Left).mutates_tree());
        assert!(Action::ConsumeOrExpel(Direction::Right).mutates_tree());
        assert!(!Action::Focus(Direction::Up).mutates_tree());
        assert!(!Action::ToggleFloatingPane.mutates_tree());
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::Split(Direction::Right),
            Action::NavigateStack(StackStep::Down),
            Action::Resize {
                direction: Direction::Left,
                steps: 2,
            },
            Action::OpenFloatingProfile("github".into()),
            Action::None,
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
