//! Theme controller bound to the live document.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node, Storage, StorageEvent, Window};

use super::listen;
use crate::config::ThemeConfig;
use crate::controller::{
    ColorSchemeSignal, ControlKind, ThemeController, claimed_by_control, parent_targets, resolve_controls,
};
use crate::dom::ClassTarget;
use crate::error::UiError;
use crate::events::{ThemeEvents, ThemeNotifier};
use crate::store::{MemoryStore, PreferenceStore};
use crate::theme::ThemePreference;

pub type BrowserThemeController = ThemeController<Element, Box<dyn PreferenceStore>, WindowNotifier>;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

impl ClassTarget for Element {
    fn has_class(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }

    fn set_class(&self, name: &str, on: bool) {
        if let Err(err) = self.class_list().toggle_with_force(name, on) {
            log::warn!("class {name} on <{}>: {}", self.tag_name(), UiError::from(err));
        }
    }
}

/// `localStorage`.
pub struct LocalStore(Storage);

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.0.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read {key}: {}", UiError::from(err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        Ok(self.0.set_item(key, value)?)
    }
}

/// `localStorage` when available, else a page-lifetime map.
fn preference_store(window: &Window) -> Box<dyn PreferenceStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Box::new(LocalStore(storage)),
        Ok(None) => {
            log::warn!("localStorage unavailable; theme will not persist");
            Box::new(MemoryStore::new())
        }
        Err(err) => {
            log::warn!("localStorage denied ({}); theme will not persist", UiError::from(err));
            Box::new(MemoryStore::new())
        }
    }
}

/// `prefers-color-scheme` media query.
pub struct MediaQuerySignal<'a>(pub &'a Window);

impl ColorSchemeSignal for MediaQuerySignal<'_> {
    fn prefers_dark(&self) -> bool {
        match self.0.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(query)) => query.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("matchMedia: {}", UiError::from(err));
                false
            }
        }
    }
}

/// Dispatches the change event on `window`, then runs Rust-side listeners.
pub struct WindowNotifier {
    window: Window,
    event_name: String,
    subscribers: ThemeEvents,
}

impl WindowNotifier {
    pub fn new(window: Window, event_name: &str) -> Self {
        Self { window, event_name: event_name.to_owned(), subscribers: ThemeEvents::new() }
    }

    pub fn subscribers(&self) -> &ThemeEvents {
        &self.subscribers
    }

    fn dispatch(&self) -> Result<(), UiError> {
        let event = Event::new(&self.event_name)?;
        self.window.dispatch_event(&event)?;
        Ok(())
    }
}

impl ThemeNotifier for WindowNotifier {
    fn theme_changed(&self, pref: ThemePreference) {
        if let Err(err) = self.dispatch() {
            log::warn!("dispatch {}: {err}", self.event_name);
        }
        self.subscribers.emit(pref);
    }
}

/// Build the controller, apply the initial theme and bind every toggle.
pub fn mount(window: &Window, document: &Document, config: &ThemeConfig) -> Result<Rc<BrowserThemeController>, UiError> {
    let root = document.document_element().ok_or(UiError::MissingDocument)?;
    let controls = resolve_controls(&config.toggle_ids, |id| {
        document.get_element_by_id(id).map(|el| {
            let kind = ControlKind::from_tag(&el.tag_name());
            (el, kind)
        })
    });
    let notifier = WindowNotifier::new(window.clone(), &config.change_event);
    let controller = Rc::new(ThemeController::new(config, root, controls, preference_store(window), notifier));

    let initial = controller.initialize(&MediaQuerySignal(window));
    log::debug!("initial theme: {initial}");

    bind_toggles(&controller, config)?;
    watch_other_tabs(window, &controller)?;
    Ok(controller)
}

fn bind_toggles(controller: &Rc<BrowserThemeController>, config: &ThemeConfig) -> Result<(), UiError> {
    for control in controller.controls() {
        let ctrl = Rc::clone(controller);
        listen(&control.element, "click", move |_| {
            ctrl.toggle();
        })?;
    }

    for parent in parent_targets(controller.controls(), config, |el: &Element| el.parent_element()) {
        let ctrl = Rc::clone(controller);
        listen(&parent, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
            if claimed_by_control(ctrl.controls(), |el| el.contains(target.as_ref())) {
                return;
            }
            ctrl.toggle();
        })?;
    }
    Ok(())
}

fn watch_other_tabs(window: &Window, controller: &Rc<BrowserThemeController>) -> Result<(), UiError> {
    let ctrl = Rc::clone(controller);
    listen(window, "storage", move |event: Event| {
        let Some(event) = event.dyn_ref::<StorageEvent>() else {
            return;
        };
        // `key` is null when the whole store was cleared.
        if event.key().is_none_or(|key| key == ctrl.storage_key()) {
            ctrl.sync_from_store();
        }
    })
}
