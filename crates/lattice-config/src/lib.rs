//! Lattice configuration system.
//!
//! TOML-based configuration with full validation. All sections use
//! defaults so partial configs work out of the box.

pub mod keys;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    FloatingPaneConfig, FloatingProfileConfig, LatticeConfig, LayoutConfig, LogLevel,
    LoggingConfig, WorkspaceConfig, CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_from_path, load_from_str};

use lattice_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<LatticeConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LatticeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
