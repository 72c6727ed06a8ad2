use super::*;

// =============================================================
// Clear button
// =============================================================

#[test]
fn clear_button_shown_for_value_or_focus() {
    assert!(clear_button_visible("abc", false));
    assert!(clear_button_visible("", true));
    assert!(clear_button_visible("abc", true));
}

#[test]
fn clear_button_hidden_when_empty_and_blurred() {
    assert!(!clear_button_visible("", false));
}

#[test]
fn whitespace_counts_as_value_for_clear_button() {
    assert!(clear_button_visible(" ", false));
}

#[test]
fn clear_button_display_values() {
    assert_eq!(clear_button_display("x", false), "flex");
    assert_eq!(clear_button_display("", false), "none");
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn blank_values_are_missing() {
    assert_eq!(check_required(""), FieldStatus::Missing);
    assert_eq!(check_required("   "), FieldStatus::Missing);
    assert_eq!(check_required("\t\n"), FieldStatus::Missing);
}

#[test]
fn non_blank_values_are_filled() {
    assert_eq!(check_required("Roma"), FieldStatus::Filled);
    assert_eq!(check_required("  3 kW "), FieldStatus::Filled);
}

#[test]
fn report_blocks_when_any_field_missing() {
    let report = RequiredReport::check(["Roma", "", "12"]);
    assert!(report.blocks_submit());
    assert_eq!(report.missing_count(), 1);
    assert_eq!(report.statuses, vec![FieldStatus::Filled, FieldStatus::Missing, FieldStatus::Filled]);
}

#[test]
fn report_passes_when_all_filled() {
    let report = RequiredReport::check(["a", "b"]);
    assert!(!report.blocks_submit());
    assert_eq!(report.missing_count(), 0);
}

#[test]
fn report_with_no_fields_passes() {
    let report = RequiredReport::check(std::iter::empty());
    assert!(!report.blocks_submit());
}

#[test]
fn border_only_for_missing_fields() {
    assert_eq!(required_border(FieldStatus::Missing, "3px solid red"), "3px solid red");
    assert_eq!(required_border(FieldStatus::Filled, "3px solid red"), "");
}

#[test]
fn highlight_clears_once_field_has_content() {
    assert!(should_clear_highlight("x"));
    assert!(!should_clear_highlight(" "));
}

// =============================================================
// Enter suppression
// =============================================================

#[test]
fn only_enter_is_suppressed() {
    assert!(suppresses_key("Enter"));
    assert!(!suppresses_key("Tab"));
    assert!(!suppresses_key("enter"));
    assert!(!suppresses_key("a"));
}
