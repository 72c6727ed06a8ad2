//! Browser presentation glue for the SIT web front end.
//!
//! This crate is compiled to WebAssembly and loaded by server-rendered pages.
//! It owns the light/dark theme preference, the back-navigation guard used on
//! pages that must not be revisited, and the small form helpers (clear
//! buttons, required-field highlighting, Enter suppression, tooltips).
//!
//! Every behavior lives in a browser-independent core driven through small
//! traits so it can be tested natively. The `hydrate` feature adds the
//! `web-sys` adapters in [`browser`] and the wasm entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `ThemePreference` value type |
//! | [`dom`] | Class-list surface mutated by the core |
//! | [`store`] | Persistent key-value store trait and in-memory fallback |
//! | [`events`] | Theme change notification and subscription list |
//! | [`controller`] | The theme controller state machine |
//! | [`history_guard`] | Back-navigation guard |
//! | [`forms`] | Clear buttons, required fields, Enter suppression |
//! | [`tooltip`] | Open/close decision for single-active tooltips |
//! | [`config`] | Typed page configuration |
//! | [`error`] | Crate error type |

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod events;
pub mod forms;
pub mod history_guard;
pub mod store;
pub mod theme;
pub mod tooltip;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod testing;
