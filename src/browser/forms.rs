//! Form helpers bound to the parsed document.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use super::{listen, select_all};
use crate::config::FormConfig;
use crate::dom::ClassTarget;
use crate::error::UiError;
use crate::forms::{RequiredReport, clear_button_display, required_border, should_clear_highlight, suppresses_key};
use crate::tooltip::TooltipAction;

/// Wire every helper. Called once the DOM is ready.
pub fn mount(document: &Document, config: &FormConfig) -> Result<(), UiError> {
    let config = Rc::new(config.clone());
    bind_clear_groups(document, &config)?;
    bind_clearables(document, &config)?;
    bind_required(document, &config)?;
    if config.suppress_enter {
        bind_enter_suppression(document)?;
    }
    bind_tooltips(document, &config)?;
    Ok(())
}

// =============================================================
// Field access
// =============================================================

/// `value` of an input, textarea or select.
fn field_value(el: &Element) -> String {
    match js_sys::Reflect::get(el, &JsValue::from_str("value")) {
        Ok(value) => value.as_string().unwrap_or_default(),
        Err(err) => {
            log::warn!("read value of <{}>: {}", el.tag_name(), UiError::from(err));
            String::new()
        }
    }
}

fn clear_field(el: &Element) -> Result<(), UiError> {
    js_sys::Reflect::set(el, &JsValue::from_str("value"), &JsValue::from_str(""))?;
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.focus()?;
    }
    Ok(())
}

fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = html.style().set_property(property, value) {
        log::warn!("style {property} on <{}>: {}", el.tag_name(), UiError::from(err));
    }
}

// =============================================================
// Clear buttons
// =============================================================

/// Show or hide the clear button next to `field`.
fn update_clear_button(document: &Document, field: &Element, button_class: &str) {
    let Some(parent) = field.parent_element() else {
        return;
    };
    let button = match parent.query_selector(&format!(".{button_class}")) {
        Ok(Some(button)) => button,
        Ok(None) => return,
        Err(err) => {
            log::warn!("clear button lookup: {}", UiError::from(err));
            return;
        }
    };
    let focused = document.active_element().is_some_and(|active| active == *field);
    set_style(&button, "display", clear_button_display(&field_value(field), focused));
}

/// Clicks on a clear button inside a form group empty the input two
/// siblings before it.
fn bind_clear_groups(document: &Document, config: &Rc<FormConfig>) -> Result<(), UiError> {
    for group in select_all(document, &config.group_selector)? {
        let doc = document.clone();
        let cfg = Rc::clone(config);
        listen(&group, "click", move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_ref::<Element>().cloned()) else {
                return;
            };
            if !target.class_list().contains(&cfg.clear_button_class) {
                return;
            }
            let Some(field) = target.previous_element_sibling().and_then(|el| el.previous_element_sibling()) else {
                return;
            };
            if let Err(err) = clear_field(&field) {
                log::warn!("clear field: {err}");
            }
            update_clear_button(&doc, &field, &cfg.clear_button_class);
            event.prevent_default();
        })?;
    }
    Ok(())
}

fn bind_clearables(document: &Document, config: &Rc<FormConfig>) -> Result<(), UiError> {
    let mut fields = select_all(document, &config.clearable_selector)?;
    for selector in &config.extra_clearables {
        for field in select_all(document, selector)? {
            bind_own_clear_button(&field, config)?;
            fields.push(field);
        }
    }

    for field in fields {
        for event in ["input", "focus"] {
            let doc = document.clone();
            let el = field.clone();
            let cfg = Rc::clone(config);
            listen(&field, event, move |_| update_clear_button(&doc, &el, &cfg.clear_button_class))?;
        }

        // Deferred so a click on the clear button lands before it is hidden.
        let doc = document.clone();
        let el = field.clone();
        let cfg = Rc::clone(config);
        listen(&field, "blur", move |_| {
            let doc = doc.clone();
            let el = el.clone();
            let cfg = Rc::clone(&cfg);
            Timeout::new(cfg.blur_recheck_ms, move || update_clear_button(&doc, &el, &cfg.clear_button_class)).forget();
        })?;

        update_clear_button(document, &field, &config.clear_button_class);
    }
    Ok(())
}

/// Standalone clearables own the clear button in their parent.
fn bind_own_clear_button(field: &Element, config: &Rc<FormConfig>) -> Result<(), UiError> {
    let Some(button) = field
        .parent_element()
        .map(|parent| parent.query_selector(&format!(".{}", config.clear_button_class)))
        .transpose()?
        .flatten()
    else {
        return Ok(());
    };
    let el = field.clone();
    listen(&button, "click", move |_| {
        if let Err(err) = clear_field(&el) {
            log::warn!("clear field: {err}");
        }
    })
}

// =============================================================
// Required fields
// =============================================================

fn bind_required(document: &Document, config: &Rc<FormConfig>) -> Result<(), UiError> {
    let Some(submit) = document.get_element_by_id(&config.submit_button_id) else {
        return Ok(());
    };
    let fields = Rc::new(select_all(document, &format!("[{}]", config.required_attribute))?);

    let window = web_sys::window().ok_or(UiError::MissingWindow)?;
    let cfg = Rc::clone(config);
    let checked = Rc::clone(&fields);
    listen(&submit, "click", move |event: Event| {
        let values: Vec<String> = checked.iter().map(field_value).collect();
        let report = RequiredReport::check(values.iter().map(String::as_str));
        for (field, status) in checked.iter().zip(&report.statuses) {
            set_style(field, "border", required_border(*status, &cfg.required_border));
        }
        if report.blocks_submit() {
            event.prevent_default();
            log::info!("submit blocked: {} required field(s) empty", report.missing_count());
            if let Err(err) = window.alert_with_message(&cfg.required_alert) {
                log::warn!("alert: {}", UiError::from(err));
            }
        }
    })?;

    for field in fields.iter() {
        let el = field.clone();
        listen(field, "input", move |_| {
            if should_clear_highlight(&field_value(&el)) {
                set_style(&el, "border", "");
            }
        })?;
    }
    Ok(())
}

// =============================================================
// Enter suppression
// =============================================================

fn bind_enter_suppression(document: &Document) -> Result<(), UiError> {
    for input in select_all(document, "input")? {
        listen(&input, "keydown", |event: Event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if suppresses_key(&key_event.key()) {
                    event.prevent_default();
                }
            }
        })?;
    }
    Ok(())
}

// =============================================================
// Tooltips
// =============================================================

fn bind_tooltips(document: &Document, config: &Rc<FormConfig>) -> Result<(), UiError> {
    let open_selector = format!(".{}.active", config.tooltip_container_class);

    for trigger in select_all(document, &format!("[{}]", config.tooltip_attribute))? {
        let Some(target_id) = trigger.get_attribute(&config.tooltip_attribute) else {
            continue;
        };
        let doc = document.clone();
        let open_selector = open_selector.clone();
        listen(&trigger, "click", move |_| {
            let target = doc.get_element_by_id(&target_id);
            let action = TooltipAction::for_click(target.as_ref().is_some_and(|el| el.has_class("active")));
            match select_all(&doc, &open_selector) {
                Ok(open) => open.iter().for_each(|el| el.set_class("active", false)),
                Err(err) => log::warn!("tooltip lookup: {err}"),
            }
            if action.opens_target() {
                match target {
                    Some(container) => container.set_class("active", true),
                    None => log::debug!("tooltip #{target_id} not on page"),
                }
            }
        })?;
    }
    Ok(())
}
