//! View settings shared by all components of the app.
//!
//! Settings live in one store provided through context and are persisted to
//! localStorage as one JSON object. Writes from other browser windows arrive
//! through the `storage` event and replace the stored settings.

use contracts::shared::tabs::{MemorySettingsStore, SettingsStore, Subscription, ViewSettings};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

pub const VIEW_SETTINGS_STORAGE_KEY: &str = "viewSettings";

/// Parses the raw localStorage entry, falling back to empty settings
pub fn parse_stored_settings(raw: Option<&str>) -> ViewSettings {
    match raw {
        None => ViewSettings::default(),
        Some(raw) => ViewSettings::from_json(raw).unwrap_or_else(|e| {
            log::warn!("discarding stored view settings: {}", e);
            ViewSettings::default()
        }),
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_settings_from_storage() -> ViewSettings {
    let raw = local_storage().and_then(|storage| {
        storage
            .get_item(VIEW_SETTINGS_STORAGE_KEY)
            .ok()
            .flatten()
    });
    parse_stored_settings(raw.as_deref())
}

fn save_settings_to_storage(settings: &ViewSettings) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, view settings not saved");
        return;
    };
    if let Err(e) = storage.set_item(VIEW_SETTINGS_STORAGE_KEY, &settings.to_json()) {
        log::warn!("failed to save view settings: {:?}", e);
    }
}

/// Applies writes made by other windows of the same origin
fn listen_for_external_changes(context: ViewSettingsContext) {
    let Some(window) = window() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
        if event.key().as_deref() != Some(VIEW_SETTINGS_STORAGE_KEY) {
            return;
        }
        log::debug!("view settings changed in another window");
        context.replace(parse_stored_settings(event.new_value().as_deref()));
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
    {
        log::warn!("cannot listen for storage events: {:?}", e);
    }
    // lives as long as the page
    closure.forget();
}

/// Handle to the app-wide settings store
#[derive(Clone, Copy)]
pub struct ViewSettingsContext {
    store: StoredValue<MemorySettingsStore, LocalStorage>,
}

impl ViewSettingsContext {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            store: StoredValue::new_local(MemorySettingsStore::with_settings(settings)),
        }
    }

    pub fn snapshot(&self) -> ViewSettings {
        self.store.with_value(MemorySettingsStore::snapshot)
    }

    pub fn index(&self, key: &str) -> Option<usize> {
        self.store.with_value(|store| store.index(key))
    }

    /// Replaces everything, notifying listeners if anything differs
    pub fn replace(&self, settings: ViewSettings) {
        self.store.with_value(|store| store.replace(settings));
    }
}

impl SettingsStore for ViewSettingsContext {
    fn get(&self, key: &str) -> Option<Value> {
        self.store.with_value(|store| store.get(key))
    }

    fn merge(&self, patch: ViewSettings) {
        self.store.with_value(|store| store.merge(patch));
    }

    /// Listeners run synchronously on every change, including the echo of a
    /// container's own write. `Tabs` relies on the `TabsState` equality guard
    /// to ignore that echo.
    fn subscribe(&self, listener: Box<dyn Fn(&ViewSettings)>) -> Subscription {
        self.store.with_value(|store| store.subscribe(listener))
    }
}

/// Provides view settings loaded from localStorage to children components.
/// Every change is written back to localStorage.
#[component]
pub fn ViewSettingsProvider(children: Children) -> impl IntoView {
    let context = ViewSettingsContext::new(load_settings_from_storage());
    let persistence = context.subscribe(Box::new(|settings: &ViewSettings| {
        save_settings_to_storage(settings)
    }));
    // released with the provider
    let _persistence = StoredValue::new_local(persistence);

    listen_for_external_changes(context);
    provide_context(context);

    children()
}

pub fn use_view_settings() -> Option<ViewSettingsContext> {
    use_context::<ViewSettingsContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored_settings() {
        assert!(parse_stored_settings(None).is_empty());
        assert!(parse_stored_settings(Some("not json")).is_empty());
        assert!(parse_stored_settings(Some("[1]")).is_empty());

        let settings = parse_stored_settings(Some(r#"{"demoTabs": 2}"#));
        assert_eq!(settings.index("demoTabs"), Some(2));
    }

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(f)
    }

    #[test]
    fn test_context_merge_and_notify() {
        with_owner(|| {
            let context = ViewSettingsContext::new(parse_stored_settings(Some(r#"{"theme": "dark"}"#)));
            let seen = RwSignal::new(None);
            let _subscription = context.subscribe(Box::new(move |settings: &ViewSettings| {
                seen.set(settings.index("demoTabs"))
            }));

            context.merge(ViewSettings::index_patch("demoTabs", 3));
            assert_eq!(seen.get_untracked(), Some(3));
            assert_eq!(context.index("demoTabs"), Some(3));
            assert_eq!(context.get("theme"), Some(serde_json::json!("dark")));
        });
    }

    #[test]
    fn test_replace_from_other_window() {
        with_owner(|| {
            let context = ViewSettingsContext::new(ViewSettings::index_patch("demoTabs", 1));
            let calls = RwSignal::new(0);
            let _subscription = context.subscribe(Box::new(move |_: &ViewSettings| {
                calls.update(|n| *n += 1)
            }));

            context.replace(parse_stored_settings(Some(r#"{"demoTabs": 1}"#)));
            assert_eq!(calls.get_untracked(), 0);
            context.replace(parse_stored_settings(Some(r#"{"demoTabs": 2}"#)));
            assert_eq!(calls.get_untracked(), 1);
            assert_eq!(context.snapshot().index("demoTabs"), Some(2));
        });
    }
}
