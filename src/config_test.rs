use super::*;

#[test]
fn defaults_match_rendered_markup() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.theme.dark_class, "dark");
    assert_eq!(cfg.theme.change_event, "themeChanged");
    assert_eq!(cfg.theme.toggle_ids.len(), 5);
    assert_eq!(cfg.guard.blocked_path, "/operation-not-allowed/");
    assert_eq!(cfg.forms.blur_recheck_ms, 100);
    assert_eq!(cfg.forms.submit_button_id, "nextButton");
    assert!(cfg.forms.suppress_enter);
}

#[test]
fn binds_parent_only_for_listed_ids() {
    let cfg = ThemeConfig::default();
    assert!(cfg.binds_parent("theme-toggle"));
    assert!(cfg.binds_parent("theme-toggle-light"));
    assert!(!cfg.binds_parent("theme-toggle-mobile"));
    assert!(!cfg.binds_parent("theme-toggle-dropdown-dark"));
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = UiConfig::from_json("{}").unwrap();
    assert_eq!(cfg, UiConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = UiConfig::from_json(r#"{"theme": {"storage_key": "sit-theme"}, "guard": {"blocked_path": "/nope/"}}"#)
        .unwrap();
    assert_eq!(cfg.theme.storage_key, "sit-theme");
    assert_eq!(cfg.theme.dark_class, "dark");
    assert_eq!(cfg.guard.blocked_path, "/nope/");
    assert_eq!(cfg.guard.body_attribute, "data-prevent-back");
    assert_eq!(cfg.forms, FormConfig::default());
}

#[test]
fn toggle_list_override_replaces_whole_list() {
    let cfg = UiConfig::from_json(r#"{"theme": {"toggle_ids": ["only-toggle"]}}"#).unwrap();
    assert_eq!(cfg.theme.toggle_ids, vec!["only-toggle".to_owned()]);
}

#[test]
fn unknown_fields_are_ignored() {
    let cfg = UiConfig::from_json(r#"{"tailwind": true, "forms": {"extra": 1}}"#).unwrap();
    assert_eq!(cfg, UiConfig::default());
}

#[test]
fn malformed_json_is_config_error() {
    let err = UiConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn wrong_type_is_config_error() {
    let err = UiConfig::from_json(r#"{"forms": {"blur_recheck_ms": "soon"}}"#).unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}
