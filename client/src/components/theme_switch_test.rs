#![cfg(feature = "ssr")]

use super::*;
use theme_toggle::ControlConfig;

fn render(config: Option<ToggleConfig>) -> String {
    let owner = Owner::new();
    let html = owner.with(|| view! { <ThemeSwitch config=config/> }.to_html());
    html.replace("<!---->", "").replace("<!>", "")
}

#[test]
fn default_switch_matches_core_markup() {
    let html = render(None);
    assert_eq!(html, SwitchControl::default().markup().into_string());
}

#[test]
fn default_switch_has_one_checkbox_and_one_icon() {
    let html = render(None);
    assert!(html.contains("class=\"switch\""));
    assert!(html.contains("id=\"toggleTheme\""));
    assert_eq!(html.matches("<input").count(), 1);
    assert_eq!(html.matches("type=\"checkbox\"").count(), 1);
    assert_eq!(html.matches("<i ").count(), 1);
}

#[test]
fn configured_switch_matches_core_markup() {
    let config = ToggleConfig {
        apply_on_load: true,
        control: ControlConfig {
            id: "siteTheme".to_owned(),
            icon_class: "fas fa-moon".to_owned(),
            ..ControlConfig::default()
        },
        ..ToggleConfig::default()
    };
    let expected = SwitchControl::from_config(&config.control).markup().into_string();
    assert_eq!(render(Some(config)), expected);
}
