//! Message catalog context for localized labels.

use contracts::shared::tabs::{Catalog, Translator};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct I18nContext {
    pub catalog: RwSignal<Catalog>,
}

impl I18nContext {
    /// Tracked lookup, re-runs when the catalog is swapped
    pub fn translate(&self, key: &str) -> String {
        self.catalog.with(|catalog| catalog.resolve(key))
    }

    pub fn locale(&self) -> String {
        self.catalog.with(|catalog| catalog.locale().to_string())
    }
}

impl Translator for I18nContext {
    fn resolve(&self, key: &str) -> String {
        self.translate(key)
    }
}

#[component]
pub fn I18nProvider(catalog: Catalog, children: Children) -> impl IntoView {
    provide_context(I18nContext {
        catalog: RwSignal::new(catalog),
    });

    children()
}

pub fn use_i18n() -> Option<I18nContext> {
    use_context::<I18nContext>()
}
