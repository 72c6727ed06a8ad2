//! Theme change notification.
//!
//! The browser notifier dispatches a zero-payload `Event` on `window` for
//! page scripts, then fans out to Rust-side listeners held in a
//! [`ThemeEvents`] subscription list.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::theme::ThemePreference;

/// Receives "theme changed" after every successful apply.
pub trait ThemeNotifier {
    fn theme_changed(&self, pref: ThemePreference);
}

/// Handle returned by [`ThemeEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(ThemePreference)>;

/// Explicit subscription list of theme change listeners.
#[derive(Default)]
pub struct ThemeEvents {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

impl ThemeEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it runs on every subsequent emit.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(ThemePreference) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Call every listener subscribed when the emit starts, in order.
    ///
    /// Listeners may subscribe or unsubscribe from inside the callback; the
    /// change takes effect from the next emit.
    pub fn emit(&self, pref: ThemePreference) {
        let snapshot: Vec<Listener> = self.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in snapshot {
            listener(pref);
        }
    }
}

impl ThemeNotifier for ThemeEvents {
    fn theme_changed(&self, pref: ThemePreference) {
        self.emit(pref);
    }
}

impl<T: ThemeNotifier + ?Sized> ThemeNotifier for Rc<T> {
    fn theme_changed(&self, pref: ThemePreference) {
        (**self).theme_changed(pref);
    }
}

impl std::fmt::Debug for ThemeEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEvents").field("listeners", &self.len()).finish()
    }
}
