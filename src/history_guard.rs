//! Back-navigation guard.
//!
//! Installed on pages the user must not return to through the back button
//! (e.g. after a submission step). Loading the page pushes a duplicate of
//! the current entry; every later back/forward attempt pushes it again and
//! redirects to the blocked page, which turns the page into a dead end for
//! history navigation.

#[cfg(test)]
#[path = "history_guard_test.rs"]
mod history_guard_test;

use std::cell::Cell;

use crate::config::GuardConfig;
use crate::error::UiError;

/// Session history and location of the hosting window.
pub trait NavigationHost {
    /// Full URL of the current entry.
    fn current_url(&self) -> Result<String, UiError>;

    /// Push a new history entry for `url` without navigating.
    fn push_entry(&self, url: &str) -> Result<(), UiError>;

    /// Navigate to `path`.
    fn redirect(&self, path: &str) -> Result<(), UiError>;
}

/// Blocks back-navigation away from the current page.
pub struct HistoryGuard<H> {
    host: H,
    blocked_path: String,
}

impl<H: NavigationHost> HistoryGuard<H> {
    pub fn new(config: &GuardConfig, host: H) -> Self {
        Self { host, blocked_path: config.blocked_path.clone() }
    }

    /// Push one entry equal to the current location.
    pub fn install(&self) -> Result<(), UiError> {
        let url = self.host.current_url()?;
        self.host.push_entry(&url)?;
        log::debug!("history guard installed on {url}");
        Ok(())
    }

    /// Handle a back/forward attempt.
    pub fn on_pop(&self) -> Result<(), UiError> {
        let url = self.host.current_url()?;
        self.host.push_entry(&url)?;
        log::info!("blocked history navigation from {url}");
        self.host.redirect(&self.blocked_path)
    }
}

/// Marks a page as guarded so the guard is installed at most once, whether
/// it comes from the body attribute, `prevent_back()`, or both.
#[derive(Debug, Default)]
pub struct InstallLatch {
    installed: Cell<bool>,
}

impl InstallLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self { installed: Cell::new(false) }
    }

    /// True for the first caller only.
    #[must_use]
    pub fn claim(&self) -> bool {
        !self.installed.replace(true)
    }

    /// Undo a claim whose install failed, so a later request can retry.
    pub fn release(&self) {
        self.installed.set(false);
    }
}
