//! Floating overlay pane configuration types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sizing and bindings for floating sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingPaneConfig {
    /// Overlay width as a fraction of the tab view (valid range: (0, 1]).
    pub width_pct: f64,
    /// Overlay height as a fraction of the tab view (valid range: (0, 1]).
    pub height_pct: f64,
    /// Size used while the tab view has no allocation yet.
    pub fallback_width: i32,
    pub fallback_height: i32,
    /// Keys that toggle the anonymous (default) session.
    pub toggle_keys: Vec<String>,
    /// Named sessions, each with its own start URL and shortcut.
    pub profiles: BTreeMap<String, FloatingProfileConfig>,
}

impl Default for FloatingPaneConfig {
    fn default() -> Self {
        Self {
            width_pct: 0.82,
            height_pct: 0.72,
            fallback_width: 1200,
            fallback_height: 800,
            toggle_keys: vec!["alt+f".into()],
            profiles: BTreeMap::new(),
        }
    }
}

impl FloatingPaneConfig {
    /// Find the profile bound to `key`, comparing normalized bindings.
    pub fn profile_for_key(&self, key: &str) -> Option<(&str, &FloatingProfileConfig)> {
        let wanted = crate::keys::normalize(key);
        self.profiles.iter().find_map(|(name, profile)| {
            profile
                .keys
                .iter()
                .any(|k| crate::keys::normalize(k) == wanted)
                .then_some((name.as_str(), profile))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingProfileConfig {
    pub url: String,
    pub keys: Vec<String>,
}
