//! Class-list surface the core mutates.
//!
//! The browser adapter implements [`ClassTarget`] for `web_sys::Element`;
//! tests use an in-memory element.

/// Something with a class list.
pub trait ClassTarget {
    fn has_class(&self, name: &str) -> bool;

    /// Add `name` when `on`, remove it otherwise.
    fn set_class(&self, name: &str, on: bool);
}
