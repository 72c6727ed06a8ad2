//! Page configuration.
//!
//! Defaults match the markup the templates render. A page may override any
//! field by embedding a JSON object in
//! `<script type="application/json" id="sit-web-config">`; missing fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Id of the `<script>` element carrying JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "sit-web-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_CHANGE_EVENT: &str = "themeChanged";
pub const DEFAULT_BLOCKED_PATH: &str = "/operation-not-allowed/";
pub const DEFAULT_BLUR_RECHECK_MS: u32 = 100;
pub const DEFAULT_REQUIRED_BORDER: &str = "3px solid red";
pub const DEFAULT_REQUIRED_ALERT: &str = "Per favore, completa tutti i campi obbligatori.";

/// Top-level configuration for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeConfig,
    pub guard: GuardConfig,
    pub forms: FormConfig,
}

impl UiConfig {
    /// Parse overrides from JSON. Unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Theme controller settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference store key.
    pub storage_key: String,
    /// Class on the root element marking dark mode.
    pub dark_class: String,
    /// Name of the `window` event dispatched after every change.
    pub change_event: String,
    /// Ids of elements acting as toggle controls.
    pub toggle_ids: Vec<String>,
    /// Toggle ids whose parent element also toggles on click.
    pub parent_click_ids: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            change_event: DEFAULT_CHANGE_EVENT.to_owned(),
            toggle_ids: [
                "theme-toggle-mobile",
                "theme-toggle",
                "theme-toggle-light",
                "theme-toggle-dropdown-dark",
                "theme-toggle-dropdown-light",
            ]
            .map(str::to_owned)
            .to_vec(),
            parent_click_ids: ["theme-toggle", "theme-toggle-light"].map(str::to_owned).to_vec(),
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn binds_parent(&self, id: &str) -> bool {
        self.parent_click_ids.iter().any(|p| p == id)
    }
}

/// Back-navigation guard settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Where a blocked back navigation lands.
    pub blocked_path: String,
    /// `<body>` attribute that installs the guard without an explicit call.
    pub body_attribute: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { blocked_path: DEFAULT_BLOCKED_PATH.to_owned(), body_attribute: "data-prevent-back".to_owned() }
    }
}

/// Form helper settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Containers whose clicks on `.clear-button` clear the paired input.
    pub group_selector: String,
    /// Inputs that get a clear button.
    pub clearable_selector: String,
    /// Extra clearables handled the same way (e.g. free-text areas).
    pub extra_clearables: Vec<String>,
    pub clear_button_class: String,
    /// Delay before re-checking clear-button visibility after blur.
    pub blur_recheck_ms: u32,
    /// Attribute marking a required field.
    pub required_attribute: String,
    /// Id of the button that validates required fields.
    pub submit_button_id: String,
    pub required_border: String,
    pub required_alert: String,
    /// Whether Enter is swallowed on every `<input>`.
    pub suppress_enter: bool,
    pub tooltip_attribute: String,
    pub tooltip_container_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            group_selector: ".form-group, .form-group2".to_owned(),
            clearable_selector: ".custom-input".to_owned(),
            extra_clearables: vec!["#intervention_scope".to_owned()],
            clear_button_class: "clear-button".to_owned(),
            blur_recheck_ms: DEFAULT_BLUR_RECHECK_MS,
            required_attribute: "custom_req".to_owned(),
            submit_button_id: "nextButton".to_owned(),
            required_border: DEFAULT_REQUIRED_BORDER.to_owned(),
            required_alert: DEFAULT_REQUIRED_ALERT.to_owned(),
            suppress_enter: true,
            tooltip_attribute: "data-tooltip-target".to_owned(),
            tooltip_container_class: "tooltip_container".to_owned(),
        }
    }
}
