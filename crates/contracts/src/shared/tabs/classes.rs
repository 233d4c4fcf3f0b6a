//! CSS class composition for tab markup.

use std::fmt;

/// Space-separated class list that skips empty entries and duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every whitespace-separated class in `classes`
    pub fn add(mut self, classes: impl AsRef<str>) -> Self {
        for class in classes.as_ref().split_whitespace() {
            if !self.0.iter().any(|existing| existing == class) {
                self.0.push(class.to_string());
            }
        }
        self
    }

    pub fn add_if(self, classes: impl AsRef<str>, condition: bool) -> Self {
        if condition {
            self.add(classes)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn build(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

pub const ACTIVE_CLASS: &str = "is-active";
pub const DISABLED_CLASS: &str = "disabled";

/// `<li>` of one header
pub fn header_class(is_active: bool, disabled: bool, class_name: &str) -> String {
    ClassList::new()
        .add_if(ACTIVE_CLASS, is_active)
        .add_if(DISABLED_CLASS, disabled)
        .add(class_name)
        .build()
}

/// `<ul>` holding the headers
pub fn header_row_class(tabs_class: &str, segmented: bool) -> String {
    ClassList::new()
        .add("button-group no-margin")
        .add(tabs_class)
        .add_if("segmented", segmented)
        .build()
}

/// Region holding the active tab's content
pub fn content_class(content_class: &str) -> String {
    ClassList::new().add(content_class).add("tab-content").build()
}
