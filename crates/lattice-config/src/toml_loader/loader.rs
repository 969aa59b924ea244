//! Core TOML config loading: read from a string, a path, or the platform default.

use crate::schema::LatticeConfig;
use crate::validation;
use lattice_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse and validate config text. Missing fields take their defaults.
pub fn load_from_str(content: &str) -> Result<LatticeConfig, ConfigError> {
    let config: LatticeConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from a specific TOML file path.
///
/// Unlike a parse error, an invalid value is fatal here: a floating
/// profile with a bad URL or clashing key cannot be honored at runtime.
pub fn load_from_path(path: &Path) -> Result<LatticeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "rejected config");
    })?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/lattice/config.toml`
/// On macOS: `~/Library/Application Support/lattice/config.toml`
///
/// If the file does not exist, creates a documented default file and
/// returns defaults.
pub fn load_default() -> Result<LatticeConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                warn!("could not write default config: {e}");
            }
            Ok(LatticeConfig::default())
        }
        Err(e) => Err(e),
    }
}
