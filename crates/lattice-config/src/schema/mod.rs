//! Configuration schema types for Lattice.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod floating;
mod logging;
mod workspace;

pub use floating::*;
pub use logging::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    pub workspace: WorkspaceConfig,
    pub logging: LoggingConfig,
}
