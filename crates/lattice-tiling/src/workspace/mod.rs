//! Workspace: one tab's pane tree and its active pane, mutated only
//! through the operations defined here.

mod focus;
mod operations;
mod stacks;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;
