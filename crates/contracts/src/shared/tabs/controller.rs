use std::cell::Cell;
use std::rc::Rc;

use super::config::TabsConfig;
use super::descriptor::{selectable, TabDescriptor};
use super::layout::{layout, TabsLayout};
use super::settings::{SettingsStore, Subscription, ViewSettings};
use super::state::{TabEvent, TabsState, TabsStateCell};

/// Tab container bound to a settings store.
///
/// With a `setting` configured it starts from the persisted index, writes
/// every user selection back to the store and follows changes other actors
/// make to that key. The store subscription is released on drop.
pub struct TabsController<S: SettingsStore, H: TabsStateCell = Rc<Cell<TabsState>>> {
    config: TabsConfig,
    store: S,
    state: H,
    _subscription: Option<Subscription>,
}

impl<S: SettingsStore> TabsController<S> {
    pub fn new(config: TabsConfig, store: S) -> Self {
        Self::with_state(config, store, |initial| Rc::new(Cell::new(initial)))
    }
}

impl<S: SettingsStore, H: TabsStateCell> TabsController<S, H> {
    /// Like [`TabsController::new`], keeping the state in the cell built by
    /// `make_state` from the initial state.
    pub fn with_state(config: TabsConfig, store: S, make_state: impl FnOnce(TabsState) -> H) -> Self {
        let persisted = config.setting_key().and_then(|key| store.index(key));
        let state = make_state(TabsState::new(config.default_active_tab, persisted));
        let subscription = follow_setting(&config, &store, &state);

        Self {
            config,
            store,
            state,
            _subscription: subscription,
        }
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state_cell(&self) -> &H {
        &self.state
    }

    pub fn state(&self) -> TabsState {
        self.state.get_state()
    }

    pub fn active_index(&self) -> usize {
        self.state.get_state().active_index()
    }

    pub fn dispatch(&self, event: TabEvent) {
        self.state.dispatch(event);
    }

    /// Handles a click on header `index`. Absent and disabled tabs are
    /// ignored; returns whether the selection was applied.
    pub fn select<C>(&self, tabs: &[Option<TabDescriptor<C>>], index: usize) -> bool {
        if selectable(tabs, index).is_none() {
            log::warn!("ignoring selection of tab {}: absent or disabled", index);
            return false;
        }
        if let Some(key) = self.config.setting_key() {
            self.store.merge(ViewSettings::index_patch(key, index));
        }
        self.dispatch(TabEvent::UserSelected(index));
        true
    }

    /// Switches to another settings key (or none). The new key's value is
    /// compared with the last one observed, like any external change, and
    /// only the new key is followed from now on.
    pub fn set_setting(&mut self, setting: Option<String>) {
        let setting = setting.filter(|key| !key.is_empty());
        if setting.as_deref() == self.config.setting_key() {
            return;
        }
        log::debug!(
            "tab setting key {:?} -> {:?}",
            self.config.setting_key(),
            setting
        );

        self._subscription = None;
        self.config.setting = setting;
        self._subscription = follow_setting(&self.config, &self.store, &self.state);

        let value = self.config.setting_key().and_then(|key| self.store.index(key));
        self.dispatch(TabEvent::ExternalSettingChanged(value));
    }

    /// Re-reads the persisted value, for stores that cannot notify
    pub fn sync(&self) {
        if let Some(key) = self.config.setting_key() {
            self.dispatch(TabEvent::ExternalSettingChanged(self.store.index(key)));
        }
    }

    pub fn layout<'a, C>(&self, tabs: &'a [Option<TabDescriptor<C>>]) -> Option<TabsLayout<'a, C>> {
        layout(tabs, self.active_index())
    }
}

fn follow_setting<S: SettingsStore, H: TabsStateCell>(
    config: &TabsConfig,
    store: &S,
    state: &H,
) -> Option<Subscription> {
    let key = config.setting_key()?.to_string();
    let state = state.clone();
    Some(store.subscribe(Box::new(move |settings: &ViewSettings| {
        state.dispatch(TabEvent::ExternalSettingChanged(settings.index(&key)));
    })))
}
