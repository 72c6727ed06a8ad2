//! History guard bound to `window.history` and `window.location`.

use wasm_bindgen::JsValue;
use web_sys::Window;

use super::listen;
use crate::config::GuardConfig;
use crate::error::UiError;
use crate::history_guard::{HistoryGuard, InstallLatch, NavigationHost};

thread_local! {
    static INSTALLED: InstallLatch = const { InstallLatch::new() };
}

pub struct BrowserNavigation {
    window: Window,
}

impl BrowserNavigation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl NavigationHost for BrowserNavigation {
    fn current_url(&self) -> Result<String, UiError> {
        Ok(self.window.location().href()?)
    }

    fn push_entry(&self, url: &str) -> Result<(), UiError> {
        self.window.history()?.push_state_with_url(&JsValue::NULL, "", Some(url))?;
        Ok(())
    }

    fn redirect(&self, path: &str) -> Result<(), UiError> {
        Ok(self.window.location().set_href(path)?)
    }
}

/// Push the guard entry and intercept every later `popstate`.
///
/// Later calls on the same page are no-ops.
pub fn install(window: &Window, config: &GuardConfig) -> Result<(), UiError> {
    if !INSTALLED.with(InstallLatch::claim) {
        log::debug!("history guard already installed");
        return Ok(());
    }
    let guard = HistoryGuard::new(config, BrowserNavigation::new(window.clone()));
    if let Err(err) = guard.install() {
        INSTALLED.with(InstallLatch::release);
        return Err(err);
    }

    listen(window, "popstate", move |_| {
        if let Err(err) = guard.on_pop() {
            log::warn!("history guard: {err}");
        }
    })
}
