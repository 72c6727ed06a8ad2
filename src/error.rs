//! Crate error type.
//!
//! Browser failures are converted into [`UiError`] and logged where they
//! occur. None of them is shown to the user.

/// Errors raised while parsing preferences, loading config, or talking to
/// the browser.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<UiError> for wasm_bindgen::JsValue {
    fn from(err: UiError) -> Self {
        Self::from_str(&err.to_string())
    }
}
