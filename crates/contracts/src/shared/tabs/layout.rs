use super::descriptor::TabDescriptor;
use super::title::Title;

/// Render data for one header
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderModel<'a> {
    pub index: usize,
    pub title: &'a Title,
    pub sub_text: Option<&'a str>,
    pub class_name: &'a str,
    pub disabled: bool,
    pub is_active: bool,
}

/// What a container shows for one render
#[derive(Debug, PartialEq)]
pub struct TabsLayout<'a, C> {
    /// Present tabs in order, with their original indices
    pub headers: Vec<HeaderModel<'a>>,
    /// Index of the tab whose content is displayed
    pub content_index: usize,
    pub content: &'a C,
}

impl<C> TabsLayout<'_, C> {
    /// True when the active index matched no present tab and the first one
    /// is displayed instead
    pub fn is_fallback(&self) -> bool {
        !self.headers.iter().any(|header| header.is_active)
    }
}

/// Pairs every present tab with its active flag and picks the content to show.
///
/// A stale `active_index` falls back to the first present tab's content
/// without marking any header active. Returns `None` when no tab is present.
pub fn layout<C>(tabs: &[Option<TabDescriptor<C>>], active_index: usize) -> Option<TabsLayout<'_, C>> {
    let mut headers = Vec::with_capacity(tabs.len());
    let mut active: Option<(usize, &C)> = None;
    let mut first: Option<(usize, &C)> = None;

    for (index, tab) in tabs.iter().enumerate() {
        let Some(tab) = tab else {
            continue;
        };
        let is_active = index == active_index;
        if is_active {
            active = Some((index, tab.content()));
        }
        if first.is_none() {
            first = Some((index, tab.content()));
        }
        headers.push(HeaderModel {
            index,
            title: tab.title(),
            sub_text: tab.sub_text(),
            class_name: tab.class_name(),
            disabled: tab.is_disabled(),
            is_active,
        });
    }

    let (content_index, content) = match active.or(first) {
        Some(found) => found,
        None => {
            log::debug!("tab container has no tabs to show");
            return None;
        }
    };
    if active.is_none() {
        log::warn!(
            "active tab {} is not present, showing tab {}",
            active_index,
            content_index
        );
    }

    Some(TabsLayout {
        headers,
        content_index,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabs::descriptor::TabList;

    fn three_tabs() -> TabList<&'static str> {
        vec![
            Some(TabDescriptor::new("Tab1", "content 1").unwrap()),
            Some(TabDescriptor::new("settings.tab2", "content 2").unwrap()),
            Some(TabDescriptor::new("Tab3", "content 3").unwrap()),
        ]
    }

    #[test]
    fn test_marks_active_and_picks_content() {
        let tabs = three_tabs();
        for i in 0..3 {
            let view = layout(&tabs, i).unwrap();
            assert_eq!(view.content_index, i);
            assert_eq!(*view.content, ["content 1", "content 2", "content 3"][i]);
            let active: Vec<bool> = view.headers.iter().map(|h| h.is_active).collect();
            let expected: Vec<bool> = (0..3).map(|j| j == i).collect();
            assert_eq!(active, expected);
            assert!(!view.is_fallback());
        }
    }

    #[test]
    fn test_absent_tabs_keep_indices() {
        let mut tabs = three_tabs();
        tabs[1] = None;
        let view = layout(&tabs, 2).unwrap();
        let indices: Vec<usize> = view.headers.iter().map(|h| h.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(*view.content, "content 3");
        assert!(view.headers[1].is_active);
    }

    #[test]
    fn test_stale_index_falls_back_to_first_present() {
        let mut tabs = three_tabs();
        tabs[0] = None;
        let view = layout(&tabs, 9).unwrap();
        assert_eq!(view.content_index, 1);
        assert_eq!(*view.content, "content 2");
        assert!(view.is_fallback());
        assert!(view.headers.iter().all(|h| !h.is_active));

        // absent slot behaves like a stale index
        let view = layout(&tabs, 0).unwrap();
        assert_eq!(view.content_index, 1);
    }

    #[test]
    fn test_empty_state() {
        let empty: TabList<()> = Vec::new();
        assert!(layout(&empty, 0).is_none());
        let all_absent: TabList<()> = vec![None, None];
        assert!(layout(&all_absent, 0).is_none());
    }

    #[test]
    fn test_header_fields() {
        let tabs: TabList<()> = vec![Some(
            TabDescriptor::new("Orders", ())
                .unwrap()
                .with_sub_text("open")
                .with_class("orders")
                .with_disabled(true),
        )];
        let view = layout(&tabs, 0).unwrap();
        let header = &view.headers[0];
        assert_eq!(header.title, &Title::literal("Orders"));
        assert_eq!(header.sub_text, Some("open"));
        assert_eq!(header.class_name, "orders");
        assert!(header.disabled);
    }
}
