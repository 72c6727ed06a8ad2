use super::*;

#[test]
fn default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn from_dark_maps_marker_flag() {
    assert_eq!(ThemePreference::from_dark(true), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_dark(false), ThemePreference::Light);
}

#[test]
fn opposite_flips_both_ways() {
    assert_eq!(ThemePreference::Light.opposite(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.opposite(), ThemePreference::Light);
}

#[test]
fn is_dark_only_for_dark() {
    assert!(ThemePreference::Dark.is_dark());
    assert!(!ThemePreference::Light.is_dark());
}

#[test]
fn parses_stored_literals() {
    assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
    assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
}

#[test]
fn rejects_other_strings() {
    for raw in ["", "Dark", "true", " dark", "black"] {
        let err = raw.parse::<ThemePreference>().unwrap_err();
        assert!(matches!(err, UiError::InvalidPreference(ref s) if s == raw));
    }
}

#[test]
fn display_matches_stored_form() {
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
    assert_eq!(ThemePreference::Light.to_string(), "light");
}
