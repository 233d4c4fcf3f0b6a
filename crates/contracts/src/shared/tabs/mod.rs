//! Framework-agnostic core of the tab container: titles, descriptors,
//! selection state, persisted settings and the controller tying them together.

pub mod classes;
pub mod config;
pub mod controller;
pub mod descriptor;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod settings;
pub mod state;
pub mod title;

pub use classes::ClassList;
pub use config::TabsConfig;
pub use controller::TabsController;
pub use descriptor::{TabDescriptor, TabList};
pub use error::TabsError;
pub use i18n::{Catalog, Translator};
pub use layout::{layout, HeaderModel, TabsLayout};
pub use settings::{MemorySettingsStore, SettingsStore, Subscription, ViewSettings};
pub use state::{TabEvent, TabsState, TabsStateCell};
pub use title::Title;
