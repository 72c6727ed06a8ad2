use std::rc::Rc;

use super::*;

fn recorder(events: &ThemeEvents) -> (SubscriptionId, Rc<RefCell<Vec<ThemePreference>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = events.subscribe(move |pref| sink.borrow_mut().push(pref));
    (id, seen)
}

#[test]
fn emit_reaches_every_listener() {
    let events = ThemeEvents::new();
    let (_, a) = recorder(&events);
    let (_, b) = recorder(&events);

    events.emit(ThemePreference::Dark);

    assert_eq!(*a.borrow(), vec![ThemePreference::Dark]);
    assert_eq!(*b.borrow(), vec![ThemePreference::Dark]);
}

#[test]
fn emit_without_listeners_is_noop() {
    let events = ThemeEvents::new();
    assert!(events.is_empty());
    events.emit(ThemePreference::Light);
}

#[test]
fn unsubscribe_stops_delivery() {
    let events = ThemeEvents::new();
    let (id, seen) = recorder(&events);

    assert!(events.unsubscribe(id));
    events.emit(ThemePreference::Dark);

    assert!(seen.borrow().is_empty());
    assert!(events.is_empty());
}

#[test]
fn unsubscribe_unknown_id_returns_false() {
    let events = ThemeEvents::new();
    let (id, _) = recorder(&events);
    assert!(events.unsubscribe(id));
    assert!(!events.unsubscribe(id));
}

#[test]
fn subscription_ids_are_unique() {
    let events = ThemeEvents::new();
    let (a, _) = recorder(&events);
    let (b, _) = recorder(&events);
    assert_ne!(a, b);
    assert_eq!(events.len(), 2);
}

#[test]
fn notifier_impl_forwards_to_emit() {
    let events = Rc::new(ThemeEvents::new());
    let (_, seen) = recorder(&events);

    events.theme_changed(ThemePreference::Light);

    assert_eq!(*seen.borrow(), vec![ThemePreference::Light]);
}

#[test]
fn listener_can_subscribe_and_unsubscribe_during_emit() {
    let events = Rc::new(ThemeEvents::new());
    let (victim, victim_seen) = recorder(&events);
    let added = Rc::new(Cell::new(0u32));

    let inner = Rc::clone(&events);
    let added_count = Rc::clone(&added);
    events.subscribe(move |_| {
        inner.subscribe(|_| {});
        inner.unsubscribe(victim);
        added_count.set(added_count.get() + 1);
    });

    events.emit(ThemePreference::Dark);

    assert_eq!(added.get(), 1);
    // Snapshot taken before the emit still delivered to the removed listener.
    assert_eq!(*victim_seen.borrow(), vec![ThemePreference::Dark]);
    // victim gone, one new listener added.
    assert_eq!(events.len(), 2);

    events.emit(ThemePreference::Light);
    assert_eq!(*victim_seen.borrow(), vec![ThemePreference::Dark]);
    assert_eq!(added.get(), 2);
}
