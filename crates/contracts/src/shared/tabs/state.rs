//! Selection state of a tab container as a pure `(state, event) -> state`
//! transition, independent of any rendering framework.

use std::cell::Cell;
use std::rc::Rc;

/// Something that may move the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// A header was clicked
    UserSelected(usize),
    /// The persisted value for the container's setting is now this
    /// (`None` when the key is absent from the store)
    ExternalSettingChanged(Option<usize>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabsState {
    active_index: usize,
    default_index: usize,
    observed: Option<usize>,
}

impl TabsState {
    /// Starts from the persisted index when there is one, else from the default
    pub fn new(default_active_tab: usize, persisted: Option<usize>) -> Self {
        Self {
            active_index: persisted.unwrap_or(default_active_tab),
            default_index: default_active_tab,
            observed: persisted,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Last persisted value seen for the setting
    pub fn observed_setting(&self) -> Option<usize> {
        self.observed
    }

    #[must_use]
    pub fn apply(self, event: TabEvent) -> Self {
        match event {
            TabEvent::UserSelected(index) => {
                log::debug!("tab selected: {} -> {}", self.active_index, index);
                Self {
                    active_index: index,
                    ..self
                }
            }
            TabEvent::ExternalSettingChanged(value) if value == self.observed => self,
            TabEvent::ExternalSettingChanged(value) => {
                let active_index = value.unwrap_or(self.default_index);
                log::debug!(
                    "tab setting changed: {:?} -> {:?}, active {} -> {}",
                    self.observed,
                    value,
                    self.active_index,
                    active_index
                );
                Self {
                    active_index,
                    observed: value,
                    ..self
                }
            }
        }
    }
}

/// Where a container keeps its [`TabsState`]. The controller writes through
/// it, so a UI layer can hand in a reactive cell and re-render on change.
pub trait TabsStateCell: Clone + 'static {
    fn get_state(&self) -> TabsState;

    fn set_state(&self, state: TabsState);

    fn dispatch(&self, event: TabEvent) {
        self.set_state(self.get_state().apply(event));
    }
}

impl TabsStateCell for Rc<Cell<TabsState>> {
    fn get_state(&self) -> TabsState {
        self.get()
    }

    fn set_state(&self, state: TabsState) {
        self.set(state);
    }
}
