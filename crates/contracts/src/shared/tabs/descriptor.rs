use super::error::TabsError;
use super::title::Title;

/// Ordered tabs of a container. `None` marks a tab that is currently not
/// rendered; its slot keeps the indices of the following tabs stable.
pub type TabList<C> = Vec<Option<TabDescriptor<C>>>;

/// One tab: header data plus the content shown while it is active
#[derive(Debug, Clone, PartialEq)]
pub struct TabDescriptor<C> {
    title: Title,
    sub_text: Option<String>,
    disabled: bool,
    class_name: String,
    content: C,
}

impl<C> TabDescriptor<C> {
    /// Fails with [`TabsError::EmptyTitle`] for an empty or whitespace title.
    pub fn new(title: impl Into<Title>, content: C) -> Result<Self, TabsError> {
        Ok(Self {
            title: title.into().validate()?,
            sub_text: None,
            disabled: false,
            class_name: String::new(),
            content,
        })
    }

    pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
        let sub_text = sub_text.into();
        self.sub_text = (!sub_text.is_empty()).then_some(sub_text);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn sub_text(&self) -> Option<&str> {
        self.sub_text.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }
}

/// Descriptor at `index` if that slot is present and selectable
pub fn selectable<C>(tabs: &[Option<TabDescriptor<C>>], index: usize) -> Option<&TabDescriptor<C>> {
    tabs.get(index)
        .and_then(Option::as_ref)
        .filter(|tab| !tab.is_disabled())
}
