//! Widget sync layer: reflects pane-tree changes into the rendered widget
//! graph, by rebuild-and-reattach or by incremental stack updates.

mod geometry;
mod rebuild;
mod types;

pub use geometry::SyncedGeometry;
pub use types::*;
