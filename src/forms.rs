//! Per-field form helpers.
//!
//! Pure decisions only; the browser adapter applies them to inputs,
//! clear buttons and the submit button.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Whether an input's clear button should be shown.
#[must_use]
pub fn clear_button_visible(value: &str, focused: bool) -> bool {
    !value.is_empty() || focused
}

/// CSS `display` value for a clear button.
#[must_use]
pub fn clear_button_display(value: &str, focused: bool) -> &'static str {
    if clear_button_visible(value, focused) { "flex" } else { "none" }
}

/// Result of checking one required field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Filled,
    /// Empty or whitespace only.
    Missing,
}

#[must_use]
pub fn check_required(value: &str) -> FieldStatus {
    if value.trim().is_empty() { FieldStatus::Missing } else { FieldStatus::Filled }
}

/// Outcome of validating every required field on submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredReport {
    /// One status per field, in document order.
    pub statuses: Vec<FieldStatus>,
}

impl RequiredReport {
    pub fn check<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self { statuses: values.into_iter().map(check_required).collect() }
    }

    /// Submission must be blocked and the user alerted.
    #[must_use]
    pub fn blocks_submit(&self) -> bool {
        self.statuses.contains(&FieldStatus::Missing)
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.statuses.iter().filter(|s| **s == FieldStatus::Missing).count()
    }
}

/// Border style for a field after a submit check.
#[must_use]
pub fn required_border(status: FieldStatus, highlight: &str) -> &str {
    match status {
        FieldStatus::Missing => highlight,
        FieldStatus::Filled => "",
    }
}

/// Typing into a highlighted field clears the highlight once it has content.
#[must_use]
pub fn should_clear_highlight(value: &str) -> bool {
    check_required(value) == FieldStatus::Filled
}

/// Keys whose default action is swallowed on text inputs.
#[must_use]
pub fn suppresses_key(key: &str) -> bool {
    key == "Enter"
}
