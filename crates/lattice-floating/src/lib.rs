//! Floating overlay sessions: per-tab browser panes layered above the tile
//! tree, each with its own surface, visibility state, and resize watcher.

pub mod key;
pub mod manager;
pub mod session;
pub mod sizing;

pub use key::{floating_pane_id, normalize_session_id, SessionKey, DEFAULT_SESSION};
pub use manager::{Backends, FloatingManager, OpenOutcome};
pub use session::{FloatingSession, SessionState, Watcher};
pub use sizing::{allocation_rect, overlay_dimensions, FloatingOptions, Placement};
