//! In-memory stand-ins for browser objects, shared by unit tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::dom::ClassTarget;
use crate::events::ThemeNotifier;
use crate::theme::ThemePreference;

/// Element with a class list. Clones share the same list.
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl FakeElement {
    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::default();
        el.classes.borrow_mut().extend(classes.iter().map(|c| (*c).to_owned()));
        el
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

/// Identity, like DOM node equality.
impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.classes, &other.classes)
    }
}

impl ClassTarget for FakeElement {
    fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().contains(name)
    }

    fn set_class(&self, name: &str, on: bool) {
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(name.to_owned());
        } else {
            classes.remove(name);
        }
    }
}

/// Notifier that records every change. Clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    seen: Rc<RefCell<Vec<ThemePreference>>>,
}

impl RecordingNotifier {
    pub fn seen(&self) -> Vec<ThemePreference> {
        self.seen.borrow().clone()
    }
}

impl ThemeNotifier for RecordingNotifier {
    fn theme_changed(&self, pref: ThemePreference) {
        self.seen.borrow_mut().push(pref);
    }
}
