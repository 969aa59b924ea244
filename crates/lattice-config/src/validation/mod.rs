//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod floating;
mod helpers;
mod workspace;

#[cfg(test)]
mod tests;

use crate::keys;
use crate::schema::LatticeConfig;
use lattice_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LatticeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keys::validate_no_duplicates(&config.workspace.floating_pane) {
        errors.push(e.to_string());
    }

    workspace::validate_workspace(&mut errors, config);
    floating::validate_floating_pane(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
