use super::*;

#[test]
fn new_store_is_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("theme"), None);
}

#[test]
fn set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);
}

#[test]
fn last_write_wins() {
    let store = MemoryStore::with_entry("theme", "light");
    store.set("theme", "dark").unwrap();
    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.get("other"), None);
}

#[test]
fn shared_store_sees_writes_through_rc() {
    let store = std::rc::Rc::new(MemoryStore::new());
    let handle = std::rc::Rc::clone(&store);
    handle.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
