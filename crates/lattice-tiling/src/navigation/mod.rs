//! Geometric navigation: directional focus from on-screen rectangles.

mod scoring;
mod types;

pub use scoring::find_neighbor;
pub use types::*;
