use contracts::shared::tabs::classes::header_class;
use contracts::shared::tabs::Title;
use leptos::prelude::*;

use super::{header_dom_id, panel_dom_id};
use crate::shared::i18n::use_i18n;

/// Click on a header: reports `index` unless the header is disabled
fn select_header(index: usize, disabled: bool, on_select: Option<Callback<usize>>) {
    if disabled {
        return;
    }
    if let Some(handler) = on_select {
        handler.run(index);
    }
}

/// Single tab header. Holds no state: active flag, index and selection
/// callback come from the owning container.
#[component]
pub fn TabHeader(
    /// Literal text or catalog key
    #[prop(into)]
    title: Title,
    #[prop(optional, into)] is_active: MaybeProp<bool>,
    #[prop(optional)] index: usize,
    /// Secondary line under the title
    #[prop(optional, into)]
    sub_text: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Clicks are ignored while disabled
    #[prop(optional)]
    disabled: bool,
    #[prop(optional)] on_select: Option<Callback<usize>>,
    /// Container DOM id, used for `id` / `aria-controls`
    #[prop(optional, into)]
    id_prefix: MaybeProp<String>,
) -> impl IntoView {
    if title.is_blank() {
        log::warn!("tab header {} has an empty title", index);
    }

    let i18n = use_i18n();
    if title.is_localized() && i18n.is_none() {
        log::warn!(
            "no I18nProvider, showing key '{}' as tab title",
            title.as_str()
        );
    }

    let label = move || match i18n {
        Some(ctx) => title.display(&ctx).into_owned(),
        None => title.as_str().to_string(),
    };

    let active = move || is_active.get().unwrap_or(false);
    let li_class = move || header_class(active(), disabled, &class.get().unwrap_or_default());

    let on_click = move |_: leptos::ev::MouseEvent| select_header(index, disabled, on_select);

    view! {
        <li
            class=li_class
            role="tab"
            id=move || id_prefix.get().map(|prefix| header_dom_id(&prefix, index))
            aria-controls=move || id_prefix.get().map(|prefix| panel_dom_id(&prefix))
            aria-selected=move || if active() { "true" } else { "false" }
            aria-disabled=disabled.then_some("true")
            on:click=on_click
        >
            <a>
                <span class="tab-title">{label}</span>
                {move || sub_text.get().map(|text| view! { <div class="tab-subtext">{text}</div> })}
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_header_skips_disabled() {
        let owner = Owner::new();
        owner.with(|| {
            let selected = RwSignal::new(None);
            let on_select = Callback::new(move |index: usize| selected.set(Some(index)));

            select_header(2, true, Some(on_select));
            assert_eq!(selected.get_untracked(), None);

            select_header(2, false, Some(on_select));
            assert_eq!(selected.get_untracked(), Some(2));

            // no callback wired: nothing to do
            select_header(1, false, None);
            assert_eq!(selected.get_untracked(), Some(2));
        });
    }
}
