//! Floating pane validation (size fractions, fallback size, profiles).

use regex::Regex;
use std::sync::LazyLock;

use crate::schema::LatticeConfig;

use super::helpers::validate_range_open_min;

/// URL schemes a floating profile may start on.
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "file", "about"];

/// Leading `scheme:` of a URL.
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").unwrap());

pub(crate) fn validate_floating_pane(errors: &mut Vec<String>, config: &LatticeConfig) {
    let fp = &config.workspace.floating_pane;
    validate_range_open_min(errors, "workspace.floating_pane.width_pct", fp.width_pct, 0.0, 1.0);
    validate_range_open_min(
        errors,
        "workspace.floating_pane.height_pct",
        fp.height_pct,
        0.0,
        1.0,
    );
    if fp.fallback_width <= 0 {
        errors.push(format!(
            "workspace.floating_pane.fallback_width = {} must be positive",
            fp.fallback_width
        ));
    }
    if fp.fallback_height <= 0 {
        errors.push(format!(
            "workspace.floating_pane.fallback_height = {} must be positive",
            fp.fallback_height
        ));
    }
    validate_keys(errors, "workspace.floating_pane.toggle_keys", &fp.toggle_keys);

    for (name, profile) in &fp.profiles {
        let prefix = format!("workspace.floating_pane.profiles.{name}");
        validate_profile_url(errors, &prefix, &profile.url);
        if profile.keys.is_empty() {
            errors.push(format!("{prefix}.keys must contain at least one key binding"));
        }
        validate_keys(errors, &format!("{prefix}.keys"), &profile.keys);
    }
}

fn validate_profile_url(errors: &mut Vec<String>, prefix: &str, url: &str) {
    let url = url.trim();
    if url.is_empty() {
        errors.push(format!("{prefix}.url must not be empty"));
        return;
    }
    let scheme = SCHEME_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_lowercase());
    match scheme {
        Some(s) if ALLOWED_SCHEMES.contains(&s.as_str()) => {}
        _ => errors.push(format!(
            "{prefix}.url = {url:?} must use one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )),
    }
}

fn validate_keys(errors: &mut Vec<String>, name: &str, keys: &[String]) {
    for (i, key) in keys.iter().enumerate() {
        if key.trim().is_empty() {
            errors.push(format!("{name}[{i}] is an empty or whitespace-only key binding"));
        }
    }
}
