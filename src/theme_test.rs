use super::*;

// =============================================================
// Representation
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn as_str_matches_attribute_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn parse_accepts_only_exact_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(" light"), None);
    assert_eq!(Theme::parse("purple"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Light).expect("serialize"), "\"light\"");
    let parsed: Theme = serde_json::from_str("\"dark\"").expect("deserialize");
    assert_eq!(parsed, Theme::Dark);
    assert!(serde_json::from_str::<Theme>("\"purple\"").is_err());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn after_dark_is_light() {
    assert_eq!(Theme::after(Some(Theme::Dark)), Theme::Light);
}

#[test]
fn after_light_is_dark() {
    assert_eq!(Theme::after(Some(Theme::Light)), Theme::Dark);
}

#[test]
fn after_unset_or_unknown_is_dark() {
    assert_eq!(Theme::after(None), Theme::Dark);
    assert_eq!(Theme::after(Theme::parse("purple")), Theme::Dark);
}

#[test]
fn toggled_twice_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}
