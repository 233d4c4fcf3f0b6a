use contracts::shared::tabs::{Catalog, TabDescriptor, TabList, TabsError};
use leptos::prelude::*;

use crate::shared::components::tabs::{tab, Tabs};
use crate::shared::i18n::{use_i18n, I18nProvider};
use crate::shared::view_settings::ViewSettingsProvider;

const EN_CATALOG: &str = include_str!("../locales/en.json");

fn bundled_catalog() -> Catalog {
    Catalog::from_json("en", EN_CATALOG).unwrap_or_else(|e| {
        log::error!("bundled catalog is broken: {}", e);
        Catalog::new("en")
    })
}

/// Keeps a built tab, logging why one could not be built
fn present(built: Result<TabDescriptor<ViewFn>, TabsError>) -> Option<TabDescriptor<ViewFn>> {
    built.map_err(|e| log::error!("demo tab dropped: {}", e)).ok()
}

/// Tabs of the demo page. The beta tab is conditional; the archive tab is
/// listed but disabled.
fn demo_tabs(show_beta: bool) -> TabList<ViewFn> {
    vec![
        present(tab("demo.tabs.overview", || {
            view! { <p>"Selected tab is remembered across reloads."</p> }
        })),
        present(
            tab("Activity", || view! { <p>"Nothing happened yet."</p> })
                .map(|t| t.with_sub_text("0 new")),
        ),
        show_beta
            .then(|| present(tab("demo.tabs.beta", || view! { <p>"Experimental settings."</p> })))
            .flatten(),
        present(
            tab("Archive", || view! { <p>"Archived items."</p> }).map(|t| t.with_disabled(true)),
        ),
    ]
}

#[component]
fn DemoPage() -> impl IntoView {
    let i18n = use_i18n();
    let text = move |key: &'static str| match i18n {
        Some(ctx) => ctx.translate(key),
        None => key.to_string(),
    };

    let show_beta = RwSignal::new(true);
    let tabs = Signal::derive(move || demo_tabs(show_beta.get()));

    view! {
        <div class="demo-page" lang=move || i18n.map(|ctx| ctx.locale())>
            <h1>{move || text("demo.title")}</h1>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || show_beta.get()
                    on:change=move |_| show_beta.update(|v| *v = !*v)
                />
                {move || text("demo.show_beta")}
            </label>

            <Tabs setting="demoTabs" tabs=tabs content_class="demo-content" />

            // same setting: follows the container above
            <Tabs setting="demoTabs" tabs=tabs segmented=false tabs_class="small" />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <I18nProvider catalog=bundled_catalog()>
            <ViewSettingsProvider>
                <DemoPage />
            </ViewSettingsProvider>
        </I18nProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_has_demo_titles() {
        let catalog = bundled_catalog();
        assert_eq!(catalog.get("demo.tabs.overview"), Some("Overview"));
        assert_eq!(catalog.get("demo.tabs.beta"), Some("Beta features"));
    }

    #[test]
    fn test_demo_tabs_keep_indices() {
        let with_beta = demo_tabs(true);
        let without_beta = demo_tabs(false);
        assert_eq!(with_beta.len(), 4);
        assert_eq!(without_beta.len(), 4);
        assert!(with_beta[2].is_some());
        assert!(without_beta[2].is_none());
        let archive = without_beta[3].as_ref().unwrap();
        assert!(archive.is_disabled());
        assert_eq!(archive.title().as_str(), "Archive");
    }

    #[test]
    fn test_blank_tab_is_left_out() {
        assert!(present(tab("  ", || view! { <p /> })).is_none());
        assert!(present(tab("Activity", || view! { <p /> })).is_some());
    }
}
