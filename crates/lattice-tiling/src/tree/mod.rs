mod operations;
mod snapshot;
mod traversal;
mod types;
mod validate;

pub use snapshot::NodeSnapshot;
pub use types::*;
