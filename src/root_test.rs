use super::*;

#[test]
fn unset_attribute_is_none() {
    let root = MemoryRoot::new();
    assert_eq!(root.attribute("data-theme"), None);
}

#[test]
fn set_attribute_replaces_value() {
    let mut root = MemoryRoot::with_attribute("data-theme", "dark");
    root.set_attribute("data-theme", "light").expect("set");
    assert_eq!(root.attribute("data-theme").as_deref(), Some("light"));
}
