use serde::{Deserialize, Serialize};

use super::error::TabsError;

/// Options of a tab container.
///
/// Field names deserialize from camelCase so existing option objects such as
/// `{"setting": "walletTab", "defaultActiveTab": 1}` load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabsConfig {
    /// Settings key under which the active index is persisted
    pub setting: Option<String>,
    pub default_active_tab: usize,
    pub segmented: bool,
    pub tabs_class: String,
    pub content_class: String,
    pub class_name: String,
    /// Inline style of the header row
    pub style: Option<String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            setting: None,
            default_active_tab: 0,
            segmented: true,
            tabs_class: String::new(),
            content_class: String::new(),
            class_name: String::new(),
            style: None,
        }
    }
}

impl TabsConfig {
    pub fn from_json(json: &str) -> Result<Self, TabsError> {
        serde_json::from_str(json).map_err(TabsError::InvalidConfig)
    }

    pub fn with_setting(mut self, setting: impl Into<String>) -> Self {
        let setting = setting.into();
        self.setting = (!setting.is_empty()).then_some(setting);
        self
    }

    pub fn with_default_active_tab(mut self, index: usize) -> Self {
        self.default_active_tab = index;
        self
    }

    /// Configured settings key, ignoring an empty string
    pub fn setting_key(&self) -> Option<&str> {
        self.setting.as_deref().filter(|key| !key.is_empty())
    }
}
