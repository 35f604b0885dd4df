#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_preference_is_configured_default_outside_browser() {
    assert_eq!(load_preference(&ToggleConfig::default()), Theme::Dark);
    let light = ToggleConfig {
        default_theme: Theme::Light,
        apply_on_load: true,
        ..ToggleConfig::default()
    };
    assert_eq!(load_preference(&light), Theme::Light);
}

#[test]
fn toggle_reports_missing_browser() {
    let err = toggle(&ToggleConfig::default()).expect_err("no document in native tests");
    assert!(matches!(err, ThemeError::Unavailable(_)));
}

#[test]
fn toggle_validates_config_first() {
    let config = ToggleConfig { storage_key: String::new(), ..ToggleConfig::default() };
    let err = toggle(&config).expect_err("invalid config");
    assert!(matches!(err, ThemeError::InvalidConfig { field: "storage_key", .. }));
}
