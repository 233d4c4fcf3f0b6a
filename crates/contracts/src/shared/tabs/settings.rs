//! Persisted view settings and the store abstraction tab containers use to
//! remember their active tab.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::error::TabsError;

/// Key/value map of UI preferences, persisted as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewSettings(Map<String, Value>);

impl ViewSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, TabsError> {
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(other) => Err(TabsError::InvalidSettings(format!(
                "expected an object, got {}",
                other
            ))),
            Err(e) => Err(TabsError::InvalidSettings(e.to_string())),
        }
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// Single-key patch recording a tab index
    pub fn index_patch(key: impl Into<String>, index: usize) -> Self {
        let mut patch = Self::new();
        patch.set(key, Value::from(index));
        patch
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Stored value under `key` read as a tab index
    pub fn index(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|value| value_as_index(key, value))
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Overwrites the keys present in `patch`, leaves all others alone.
    /// Returns whether anything changed.
    pub fn merge(&mut self, patch: ViewSettings) -> bool {
        let mut changed = false;
        for (key, value) in patch.0 {
            if self.0.get(&key) != Some(&value) {
                self.0.insert(key, value);
                changed = true;
            }
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for ViewSettings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reads a stored JSON value as a tab index; anything but a non-negative
/// integer counts as absent.
pub fn value_as_index(key: &str, value: &Value) -> Option<usize> {
    match value.as_u64().and_then(|n| usize::try_from(n).ok()) {
        Some(index) => Some(index),
        None => {
            log::warn!("setting '{}' is not a tab index: {}", key, value);
            None
        }
    }
}

/// Keeps a store listener registered until dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Shared settings storage. Implementations use interior mutability so one
/// handle can be shared by every container.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;

    /// Merges `patch` into the stored settings and notifies subscribers if
    /// anything changed.
    fn merge(&self, patch: ViewSettings);

    /// Calls `listener` with the full settings after every change
    fn subscribe(&self, listener: Box<dyn Fn(&ViewSettings)>) -> Subscription;

    fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }

    fn index(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|value| value_as_index(key, &value))
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Rc<S> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn merge(&self, patch: ViewSettings) {
        (**self).merge(patch)
    }

    fn subscribe(&self, listener: Box<dyn Fn(&ViewSettings)>) -> Subscription {
        (**self).subscribe(listener)
    }
}

/// No store at all: nothing persisted, nothing to follow
impl<S: SettingsStore> SettingsStore for Option<S> {
    fn get(&self, key: &str) -> Option<Value> {
        self.as_ref().and_then(|store| store.get(key))
    }

    fn merge(&self, patch: ViewSettings) {
        if let Some(store) = self {
            store.merge(patch);
        }
    }

    fn subscribe(&self, listener: Box<dyn Fn(&ViewSettings)>) -> Subscription {
        match self {
            Some(store) => store.subscribe(listener),
            None => Subscription::new(|| {}),
        }
    }
}

type Listener = Rc<dyn Fn(&ViewSettings)>;

#[derive(Default)]
struct StoreInner {
    settings: ViewSettings,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// In-process store; clones share the same settings and listeners
#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ViewSettings) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().settings = settings;
        store
    }

    pub fn snapshot(&self) -> ViewSettings {
        self.inner.borrow().settings.clone()
    }

    /// Swaps in a complete set of settings, e.g. one loaded elsewhere
    pub fn replace(&self, settings: ViewSettings) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.settings != settings;
            inner.settings = settings;
            changed
        };
        if changed {
            self.notify();
        }
    }

    /// Removes a key, notifying subscribers if it existed
    pub fn remove(&self, key: &str) {
        let removed = self.inner.borrow_mut().settings.remove(key).is_some();
        if removed {
            self.notify();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // listeners run without the borrow held so they may read the store
        let (settings, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.settings.clone(), listeners)
        };
        for listener in listeners {
            listener(&settings);
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.inner.borrow().settings.get(key).cloned()
    }

    fn merge(&self, patch: ViewSettings) {
        let changed = self.inner.borrow_mut().settings.merge(patch);
        if changed {
            self.notify();
        }
    }

    fn subscribe(&self, listener: Box<dyn Fn(&ViewSettings)>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::from(listener)));
            id
        };

        let weak: Weak<RefCell<StoreInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }
}

impl std::fmt::Debug for MemorySettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemorySettingsStore")
            .field("settings", &inner.settings)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_view_settings_json() {
        let settings = ViewSettings::from_json(r#"{"walletTab": 2, "theme": "dark"}"#).unwrap();
        assert_eq!(settings.index("walletTab"), Some(2));
        assert_eq!(settings.get("theme"), Some(&json!("dark")));
        assert_eq!(ViewSettings::from_json(&settings.to_json()).unwrap(), settings);

        assert!(matches!(
            ViewSettings::from_json("[]"),
            Err(TabsError::InvalidSettings(_))
        ));
        assert!(matches!(
            ViewSettings::from_json("nope"),
            Err(TabsError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_index_rejects_non_integers() {
        let settings: ViewSettings = [
            ("neg".to_string(), json!(-1)),
            ("float".to_string(), json!(1.5)),
            ("text".to_string(), json!("2")),
            ("ok".to_string(), json!(0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(settings.index("neg"), None);
        assert_eq!(settings.index("float"), None);
        assert_eq!(settings.index("text"), None);
        assert_eq!(settings.index("ok"), Some(0));
        assert_eq!(settings.index("missing"), None);
    }

    #[test]
    fn test_merge_touches_only_patched_keys() {
        let mut settings = ViewSettings::index_patch("a", 1);
        settings.set("b", json!(true));
        assert!(settings.merge(ViewSettings::index_patch("a", 3)));
        assert_eq!(settings.index("a"), Some(3));
        assert_eq!(settings.get("b"), Some(&json!(true)));
        assert!(!settings.merge(ViewSettings::index_patch("a", 3)));
    }

    #[test]
    fn test_get_or() {
        let store = MemorySettingsStore::with_settings(ViewSettings::index_patch("a", 1));
        assert_eq!(store.get_or("a", json!(0)), json!(1));
        assert_eq!(store.get_or("b", json!(0)), json!(0));
        assert_eq!(store.index("a"), Some(1));
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let store = MemorySettingsStore::new();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let _subscription = store.subscribe(Box::new(move |_: &ViewSettings| seen.set(seen.get() + 1)));

        store.merge(ViewSettings::index_patch("a", 1));
        store.merge(ViewSettings::index_patch("a", 1));
        store.merge(ViewSettings::index_patch("a", 2));
        store.remove("a");
        store.remove("a");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = MemorySettingsStore::new();
        let reader = store.clone();
        let last = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last);
        let _subscription = store.subscribe(Box::new(move |_: &ViewSettings| sink.set(reader.index("a"))));
        store.merge(ViewSettings::index_patch("a", 4));
        assert_eq!(last.get(), Some(4));
    }

    #[test]
    fn test_replace_notifies_on_difference() {
        let store = MemorySettingsStore::with_settings(ViewSettings::index_patch("a", 1));
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let _subscription = store.subscribe(Box::new(move |_: &ViewSettings| seen.set(seen.get() + 1)));

        store.replace(ViewSettings::index_patch("a", 1));
        assert_eq!(calls.get(), 0);
        store.replace(ViewSettings::index_patch("b", 2));
        assert_eq!(calls.get(), 1);
        assert_eq!(store.index("a"), None);
        assert_eq!(store.index("b"), Some(2));
    }

    #[test]
    fn test_absent_store() {
        let store: Option<MemorySettingsStore> = None;
        store.merge(ViewSettings::index_patch("a", 1));
        assert_eq!(store.get("a"), None);
        let _subscription = store.subscribe(Box::new(|_: &ViewSettings| {}));
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = MemorySettingsStore::new();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let subscription = store.subscribe(Box::new(move |_: &ViewSettings| seen.set(seen.get() + 1)));
        assert_eq!(store.listener_count(), 1);

        drop(subscription);
        assert_eq!(store.listener_count(), 0);
        store.merge(ViewSettings::index_patch("a", 1));
        assert_eq!(calls.get(), 0);

        let subscription = store.subscribe(Box::new(|_: &ViewSettings| {}));
        subscription.unsubscribe();
        assert_eq!(store.listener_count(), 0);
    }
}
