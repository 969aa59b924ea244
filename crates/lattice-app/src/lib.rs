//! Application wiring for the Lattice layout core: the window-level state
//! that owns tabs, widget views and floating sessions, plus the script
//! format the headless driver replays.

pub mod app_state;
pub mod script;

pub use app_state::{
    AppSnapshot, CloseResult, FloatingSnapshot, FocusOverride, LatticeApp, TabSnapshot,
};
