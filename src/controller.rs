//! Theme controller.
//!
//! Owns the root element, the toggle controls found on the page, the
//! preference store and the change notifier. One controller is built per page
//! load and dropped on navigation.
//!
//! Rendered state (the root element's dark class) is what `toggle` inverts,
//! so a click always flips what the user sees. Store and DOM can only diverge
//! when another tab writes the key; the browser adapter repairs that through
//! [`ThemeController::sync_from_store`] on the `storage` event.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::dom::ClassTarget;
use crate::events::ThemeNotifier;
use crate::store::PreferenceStore;
use crate::theme::ThemePreference;

/// Classes on icon controls, paired with whether each is present in dark mode.
pub const ICON_CLASSES: [(&str, bool); 4] = [("fa-sun", true), ("icona", true), ("fa-moon", false), ("text-black", false)];

/// Platform hint for the preferred color scheme.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// A fixed answer, for hosts without a media query.
impl ColorSchemeSignal for bool {
    fn prefers_dark(&self) -> bool {
        *self
    }
}

/// How a toggle control renders the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Icon-font glyph (`<i>`); glyph and color classes follow the mode.
    Icon,
    /// Anything else; shown or hidden by the stylesheet alone.
    Image,
}

impl ControlKind {
    /// Classify an element by tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("i") { Self::Icon } else { Self::Image }
    }
}

/// An element that flips the theme when clicked.
#[derive(Clone, Debug)]
pub struct ToggleControl<E> {
    pub id: String,
    pub kind: ControlKind,
    pub element: E,
}

impl<E: ClassTarget> ToggleControl<E> {
    /// Bring the control's visual sub-state in line with `pref`.
    pub fn sync(&self, pref: ThemePreference) {
        if self.kind == ControlKind::Icon {
            for (class, when_dark) in ICON_CLASSES {
                self.element.set_class(class, pref.is_dark() == when_dark);
            }
        }
    }
}

/// Look up every configured toggle id, skipping those not on the page.
pub fn resolve_controls<E, F>(ids: &[String], mut find: F) -> Vec<ToggleControl<E>>
where
    F: FnMut(&str) -> Option<(E, ControlKind)>,
{
    ids.iter()
        .filter_map(|id| match find(id) {
            Some((element, kind)) => Some(ToggleControl { id: id.clone(), kind, element }),
            None => {
                log::debug!("theme toggle #{id} not on page");
                None
            }
        })
        .collect()
}

/// Distinct parents of the controls listed in `parent_click_ids`.
///
/// Controls sharing a container yield it once, so one click on the container
/// flips the theme once.
pub fn parent_targets<E, F>(controls: &[ToggleControl<E>], config: &ThemeConfig, mut parent_of: F) -> Vec<E>
where
    E: PartialEq,
    F: FnMut(&E) -> Option<E>,
{
    let mut parents: Vec<E> = Vec::new();
    for control in controls.iter().filter(|c| config.binds_parent(&c.id)) {
        if let Some(parent) = parent_of(&control.element) {
            if !parents.contains(&parent) {
                parents.push(parent);
            }
        }
    }
    parents
}

/// Whether a click already handled by a control reached a bound parent.
///
/// `contains_target` reports whether the click target is the given control
/// or inside it. Parents skip such clicks instead of flipping a second time.
pub fn claimed_by_control<E, F>(controls: &[ToggleControl<E>], mut contains_target: F) -> bool
where
    F: FnMut(&E) -> bool,
{
    controls.iter().any(|control| contains_target(&control.element))
}

/// Light/dark state machine mirrored into the DOM and the store.
pub struct ThemeController<E, S, N> {
    storage_key: String,
    dark_class: String,
    root: E,
    controls: Vec<ToggleControl<E>>,
    store: S,
    notifier: N,
}

impl<E, S, N> ThemeController<E, S, N>
where
    E: ClassTarget,
    S: PreferenceStore,
    N: ThemeNotifier,
{
    pub fn new(config: &ThemeConfig, root: E, controls: Vec<ToggleControl<E>>, store: S, notifier: N) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            dark_class: config.dark_class.clone(),
            root,
            controls,
            store,
            notifier,
        }
    }

    /// The persisted preference, or `None` if never set.
    ///
    /// A stored value that is neither `"light"` nor `"dark"` counts as unset.
    pub fn preference(&self) -> Option<ThemePreference> {
        let raw = self.store.get(&self.storage_key)?;
        match raw.parse() {
            Ok(pref) => Some(pref),
            Err(err) => {
                log::warn!("ignoring stored theme: {err}");
                None
            }
        }
    }

    /// The mode currently shown, read from the root marker.
    pub fn rendered(&self) -> ThemePreference {
        ThemePreference::from_dark(self.root.has_class(&self.dark_class))
    }

    /// Render `pref`, persist it, and notify listeners.
    pub fn apply(&self, pref: ThemePreference) {
        self.render(pref);
        if let Err(err) = self.store.set(&self.storage_key, pref.as_str()) {
            log::warn!("failed to persist theme {pref}: {err}");
        }
        self.notifier.theme_changed(pref);
        log::debug!("theme applied: {pref}");
    }

    /// Apply the stored preference, or the platform hint when nothing is stored.
    pub fn initialize(&self, signal: &impl ColorSchemeSignal) -> ThemePreference {
        let pref = self
            .preference()
            .unwrap_or_else(|| ThemePreference::from_dark(signal.prefers_dark()));
        self.apply(pref);
        pref
    }

    /// Flip the rendered mode. Returns the mode now shown.
    pub fn toggle(&self) -> ThemePreference {
        let next = self.rendered().opposite();
        self.apply(next);
        next
    }

    /// Re-render from the store after an external write.
    ///
    /// Does nothing when the store is empty, invalid, or already matches the
    /// rendered mode. Never writes the store.
    pub fn sync_from_store(&self) -> Option<ThemePreference> {
        let stored = self.preference()?;
        if stored == self.rendered() {
            return None;
        }
        self.render(stored);
        self.notifier.theme_changed(stored);
        log::debug!("theme resynced from store: {stored}");
        Some(stored)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn controls(&self) -> &[ToggleControl<E>] {
        &self.controls
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn render(&self, pref: ThemePreference) {
        self.root.set_class(&self.dark_class, pref.is_dark());
        for control in &self.controls {
            control.sync(pref);
        }
    }
}
