//! Floating-pane key binding utilities.

use lattice_common::ConfigError;
use std::collections::HashMap;

use crate::schema::FloatingPaneConfig;

/// Canonical form of a binding: lowercase, no whitespace.
pub fn normalize(binding: &str) -> String {
    binding
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns every floating binding as `(owner, binding)` pairs. The toggle
/// keys are owned by `toggle_floating_pane`, profile keys by
/// `profiles.<name>`.
pub fn all_bindings(config: &FloatingPaneConfig) -> Vec<(String, &str)> {
    let mut binds: Vec<(String, &str)> = config
        .toggle_keys
        .iter()
        .map(|k| ("toggle_floating_pane".to_string(), k.as_str()))
        .collect();
    for (name, profile) in &config.profiles {
        binds.extend(
            profile
                .keys
                .iter()
                .map(|k| (format!("profiles.{name}"), k.as_str())),
        );
    }
    binds
}

/// Validate that no two bindings map to the same key combination.
/// Blank bindings are reported elsewhere and skipped here.
pub fn validate_no_duplicates(config: &FloatingPaneConfig) -> Result<(), ConfigError> {
    let binds = all_bindings(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (owner, binding) in &binds {
        let key = normalize(binding);
        if key.is_empty() {
            continue;
        }
        if let Some(existing) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate key binding '{key}': assigned to both '{existing}' and '{owner}'"
            )));
        }
        seen.insert(key, owner);
    }

    Ok(())
}
