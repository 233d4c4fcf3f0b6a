//! Message catalog used to resolve localized tab titles.

use serde_json::Value;
use std::collections::HashMap;

use super::error::TabsError;

/// Looks up display strings for catalog keys
pub trait Translator {
    fn resolve(&self, key: &str) -> String;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn resolve(&self, key: &str) -> String {
        (**self).resolve(key)
    }
}

/// Flat `dotted.key -> message` map for one locale.
///
/// Missing keys resolve to the key itself so an untranslated tab still
/// shows something recognizable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    pub fn from_pairs<I, K, V>(locale: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut catalog = Self::new(locale);
        for (key, message) in pairs {
            catalog.insert(key, message);
        }
        catalog
    }

    /// Loads a nested JSON document, e.g. `{"settings": {"tab2": "General"}}`
    /// becomes `settings.tab2 -> General`.
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self, TabsError> {
        let root: Value =
            serde_json::from_str(json).map_err(|e| TabsError::InvalidCatalog(e.to_string()))?;
        if !root.is_object() {
            return Err(TabsError::InvalidCatalog(
                "top level must be an object".to_string(),
            ));
        }

        let mut catalog = Self::new(locale);
        flatten("", &root, &mut catalog.messages)?;
        log::debug!(
            "loaded catalog '{}' with {} messages",
            catalog.locale,
            catalog.messages.len()
        );
        Ok(catalog)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn resolve(&self, key: &str) -> String {
        match self.get(key) {
            Some(message) => message.to_string(),
            None => {
                log::debug!("missing translation [{}] {}", self.locale, key);
                key.to_string()
            }
        }
    }
}

fn flatten(
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), TabsError> {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, nested, out)?;
            }
            Ok(())
        }
        Value::String(message) => {
            out.insert(prefix.to_string(), message.clone());
            Ok(())
        }
        other => Err(TabsError::InvalidCatalog(format!(
            "'{}' must be a string or an object, got {}",
            prefix, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_flattens_nested_keys() {
        let catalog = Catalog::from_json(
            "en",
            r#"{"settings": {"tab2": "General", "deep": {"x": "X"}}, "top": "Top"}"#,
        )
        .unwrap();
        assert_eq!(catalog.locale(), "en");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("settings.tab2"), Some("General"));
        assert_eq!(catalog.get("settings.deep.x"), Some("X"));
        assert_eq!(catalog.get("top"), Some("Top"));
    }

    #[test]
    fn test_from_json_rejects_bad_documents() {
        assert!(matches!(
            Catalog::from_json("en", "[1, 2]"),
            Err(TabsError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json("en", r#"{"a": {"b": 3}}"#),
            Err(TabsError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json("en", "{not json"),
            Err(TabsError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_resolve_falls_back_to_key() {
        let catalog = Catalog::from_pairs("en", [("known.key", "Known")]);
        assert_eq!(catalog.resolve("known.key"), "Known");
        assert_eq!(catalog.resolve("unknown.key"), "unknown.key");
        assert_eq!((&catalog).resolve("known.key"), "Known");
    }
}
