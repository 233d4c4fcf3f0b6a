pub mod tab_header;
pub mod tabs;

pub use tab_header::TabHeader;
pub use tabs::Tabs;

use contracts::shared::tabs::{TabDescriptor, TabsError, Title};
use leptos::prelude::*;

/// Builds a descriptor whose content is rendered by `content`
pub fn tab<F, V>(title: impl Into<Title>, content: F) -> Result<TabDescriptor<ViewFn>, TabsError>
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    TabDescriptor::new(title, ViewFn::from(move || content().into_any()))
}

pub fn header_dom_id(prefix: &str, index: usize) -> String {
    format!("{}-tab-{}", prefix, index)
}

pub fn panel_dom_id(prefix: &str) -> String {
    format!("{}-panel", prefix)
}
