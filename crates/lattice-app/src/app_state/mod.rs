//! Top-level application state.
//!
//! Wires the tab list, per-tab widget views, and floating sessions to the
//! content pool and widget toolkit, and routes user actions between them.

mod core;
mod dispatch;
mod floating;
mod focus;
mod keys;
mod panes;
mod polling;
mod shutdown;
mod snapshot;
mod tabs;

pub use self::core::LatticeApp;
pub use focus::FocusOverride;
pub use panes::CloseResult;
pub use snapshot::{AppSnapshot, FloatingSnapshot, TabSnapshot};

#[cfg(test)]
mod test_support;
