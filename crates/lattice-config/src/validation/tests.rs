//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

fn with_profile(name: &str, url: &str, keys: &[&str]) -> LatticeConfig {
    let mut config = LatticeConfig::default();
    config.workspace.floating_pane.profiles.insert(
        name.into(),
        FloatingProfileConfig {
            url: url.into(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        },
    );
    config
}

#[test]
fn default_config_validates() {
    assert!(validate(&LatticeConfig::default()).is_ok());
}

#[test]
fn catches_width_pct_zero_and_above_one() {
    for bad in [0.0, 1.5, -0.2] {
        let mut config = LatticeConfig::default();
        config.workspace.floating_pane.width_pct = bad;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("workspace.floating_pane.width_pct"), "{bad}: {err}");
    }
}

#[test]
fn width_pct_of_exactly_one_is_allowed() {
    let mut config = LatticeConfig::default();
    config.workspace.floating_pane.width_pct = 1.0;
    config.workspace.floating_pane.height_pct = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_height_pct_out_of_range() {
    let mut config = LatticeConfig::default();
    config.workspace.floating_pane.height_pct = 1.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.floating_pane.height_pct"));
}

#[test]
fn catches_non_positive_fallback_size() {
    let mut config = LatticeConfig::default();
    config.workspace.floating_pane.fallback_width = 0;
    config.workspace.floating_pane.fallback_height = -10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("fallback_width"));
    assert!(err.contains("fallback_height"));
}

#[test]
fn catches_profile_missing_url() {
    let config = with_profile("google", "", &["alt+g"]);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.floating_pane.profiles.google.url"));
}

#[test]
fn catches_profile_missing_keys() {
    let config = with_profile("google", "https://google.com", &[]);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.floating_pane.profiles.google.keys"));
}

#[test]
fn catches_whitespace_only_key() {
    let config = with_profile("google", "https://google.com", &["   ", "alt+g"]);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("empty or whitespace-only key binding"));
}

#[test]
fn catches_duplicate_key_binding() {
    let mut config = with_profile("google", "https://google.com", &["alt+g"]);
    config.workspace.floating_pane.profiles.insert(
        "github".into(),
        FloatingProfileConfig {
            url: "https://github.com".into(),
            keys: vec!["alt+g".into()],
        },
    );
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate key binding"));
}

#[test]
fn catches_unsupported_url_scheme() {
    let config = with_profile("invalid-scheme", "ftp://example.com", &["alt+i"]);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.floating_pane.profiles.invalid-scheme.url"));
    assert!(err.contains("must use one of: http, https, file, about"));
}

#[test]
fn accepts_each_allowed_scheme() {
    for url in [
        "http://a.test",
        "https://a.test",
        "file:///tmp/x.html",
        "about:blank",
        "HTTPS://UPPER.TEST",
    ] {
        let config = with_profile("p", url, &["alt+p"]);
        assert!(validate(&config).is_ok(), "{url} should validate");
    }
}

#[test]
fn two_profiles_with_distinct_keys_validate() {
    let mut config = with_profile("google", "https://google.com", &["alt+g"]);
    config.workspace.floating_pane.profiles.insert(
        "github".into(),
        FloatingProfileConfig {
            url: "https://github.com".into(),
            keys: vec!["alt+h".into()],
        },
    );
    assert!(validate(&config).is_ok());
    assert_eq!(config.workspace.floating_pane.profiles.len(), 2);
}

#[test]
fn catches_resize_step_out_of_range() {
    for bad in [0.0, 75.0] {
        let mut config = LatticeConfig::default();
        config.workspace.resize_step_percent = bad;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("workspace.resize_step_percent"));
    }
}

#[test]
fn catches_min_pane_percent_out_of_range() {
    let mut config = LatticeConfig::default();
    config.workspace.min_pane_percent = 50.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.min_pane_percent"));
}

#[test]
fn catches_gap_too_large() {
    let mut config = LatticeConfig::default();
    config.workspace.layout.gap = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.layout.gap"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = with_profile("bad", "", &[]);
    config.workspace.floating_pane.width_pct = 0.0;
    config.workspace.min_pane_percent = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("width_pct"));
    assert!(err.contains("min_pane_percent"));
    assert!(err.contains("profiles.bad.url"));
    assert!(err.contains("profiles.bad.keys"));
}
