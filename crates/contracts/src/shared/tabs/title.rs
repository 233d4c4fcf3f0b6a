//! Tab titles: either literal text or a key into the message catalog.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::TabsError;
use super::i18n::Translator;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Title {
    Literal(String),
    LocalizedKey(String),
}

impl Title {
    pub fn literal(text: impl Into<String>) -> Self {
        Title::Literal(text.into())
    }

    pub fn localized(key: impl Into<String>) -> Self {
        Title::LocalizedKey(key.into())
    }

    /// Classifies a raw title the way legacy markup did: a dot anywhere
    /// after the first character marks a catalog key.
    ///
    /// This is a heuristic. `"v1.2"` becomes a key, `".env"` stays literal.
    /// Prefer [`Title::literal`] / [`Title::localized`] in new code.
    pub fn parse(raw: &str) -> Self {
        match raw.find('.') {
            Some(pos) if pos > 0 => Title::LocalizedKey(raw.to_string()),
            _ => Title::Literal(raw.to_string()),
        }
    }

    /// Raw text: the literal itself or the catalog key
    pub fn as_str(&self) -> &str {
        match self {
            Title::Literal(text) | Title::LocalizedKey(text) => text,
        }
    }

    pub fn is_localized(&self) -> bool {
        matches!(self, Title::LocalizedKey(_))
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    pub(crate) fn validate(self) -> Result<Self, TabsError> {
        if self.is_blank() {
            return Err(TabsError::EmptyTitle);
        }
        Ok(self)
    }

    /// Text to display, going through the translator for catalog keys only
    pub fn display<'a, T: Translator + ?Sized>(&'a self, translator: &T) -> Cow<'a, str> {
        match self {
            Title::Literal(text) => Cow::Borrowed(text),
            Title::LocalizedKey(key) => Cow::Owned(translator.resolve(key)),
        }
    }
}

impl From<&str> for Title {
    fn from(raw: &str) -> Self {
        Title::parse(raw)
    }
}

impl From<String> for Title {
    fn from(raw: String) -> Self {
        Title::parse(&raw)
    }
}
