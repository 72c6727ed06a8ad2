//! `web-sys` adapters and the wasm entry point.
//!
//! `start` runs when the module is instantiated: it initializes logging,
//! reads the page config, applies the theme synchronously, installs the
//! history guard on pages that ask for it, and wires the form helpers once
//! the document has been parsed.

mod forms;
mod history;
mod theme;

pub use history::BrowserNavigation;
pub use theme::{BrowserThemeController, LocalStore, MediaQuerySignal, WindowNotifier};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget};

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::error::UiError;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    if let Err(err) = mount() {
        log::warn!("sit-web: mount failed: {err}");
    }
}

/// Install the back-navigation guard on the current page.
///
/// For pages that decide at runtime; static pages mark `<body>` with the
/// configured attribute instead.
#[wasm_bindgen]
pub fn prevent_back() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let document = window.document().ok_or(UiError::MissingDocument)?;
    let config = load_config(&document);
    history::install(&window, &config.guard)?;
    Ok(())
}

fn mount() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let document = window.document().ok_or(UiError::MissingDocument)?;
    let config = load_config(&document);

    let controller = theme::mount(&window, &document, &config.theme)?;
    controller
        .notifier()
        .subscribers()
        .subscribe(|pref| log::info!("theme changed: {pref}"));

    if document.body().is_some_and(|body| body.has_attribute(&config.guard.body_attribute)) {
        history::install(&window, &config.guard)?;
    }

    if document.ready_state() == "loading" {
        let forms = config.forms;
        let doc = document.clone();
        listen(&document, "DOMContentLoaded", move |_| {
            if let Err(err) = forms::mount(&doc, &forms) {
                log::warn!("sit-web: form helpers failed: {err}");
            }
        })?;
    } else {
        forms::mount(&document, &config.forms)?;
    }
    Ok(())
}

/// Page config from the embedded JSON element, or defaults.
fn load_config(document: &Document) -> UiConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("sit-web: {err}; using defaults");
            UiConfig::default()
        }
    }
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Every element matching `selector`, in document order.
fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}
