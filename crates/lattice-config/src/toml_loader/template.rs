//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r#"# Lattice Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[workspace]
# new_pane_url = "about:blank"
# resize_step_percent = 5.0     # (0, 50]
# min_pane_percent = 10.0       # 1-45

[workspace.layout]
# gap = 0                       # 0-40

[workspace.floating_pane]
# width_pct = 0.82              # (0, 1]
# height_pct = 0.72             # (0, 1]
# fallback_width = 1200
# fallback_height = 800
# toggle_keys = ["alt+f"]

# [workspace.floating_pane.profiles.github]
# url = "https://github.com"    # http, https, file, about
# keys = ["alt+g"]

[logging]
# level = "info"                # trace, debug, info, warn, error
"#
}
