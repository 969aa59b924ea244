use lattice_common::{HeadlessContent, HeadlessWidgets, TabId};
use lattice_config::{FloatingProfileConfig, LatticeConfig};

use super::LatticeApp;

pub(super) type HeadlessApp = LatticeApp<HeadlessContent, HeadlessWidgets>;

pub(super) const MAIL_URL: &str = "https://mail.example.com";

pub(super) fn app() -> HeadlessApp {
    app_with_config(LatticeConfig::default())
}

pub(super) fn app_with_config(config: LatticeConfig) -> HeadlessApp {
    LatticeApp::new(config, HeadlessContent::new(), HeadlessWidgets::new())
}

pub(super) fn app_with_tab() -> (HeadlessApp, TabId) {
    let mut app = app();
    let tab = app.new_tab().unwrap();
    (app, tab)
}

pub(super) fn app_with_profile() -> (HeadlessApp, TabId) {
    let mut config = LatticeConfig::default();
    config.workspace.floating_pane.profiles.insert(
        "mail".into(),
        FloatingProfileConfig {
            url: MAIL_URL.into(),
            keys: vec!["alt+m".into()],
        },
    );
    let mut app = app_with_config(config);
    let tab = app.new_tab().unwrap();
    (app, tab)
}
