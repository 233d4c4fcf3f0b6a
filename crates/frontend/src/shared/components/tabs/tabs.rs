use contracts::shared::tabs::classes;
use contracts::shared::tabs::{layout, TabList, TabsConfig, TabsController, TabsState, TabsStateCell};
use leptos::prelude::*;
use uuid::Uuid;

use super::{header_dom_id, panel_dom_id, TabHeader};
use crate::shared::view_settings::{use_view_settings, ViewSettingsContext};

/// Tabs state kept in a signal so the container re-renders on change
#[derive(Clone, Copy)]
pub struct SignalState(pub RwSignal<TabsState>);

impl TabsStateCell for SignalState {
    fn get_state(&self) -> TabsState {
        self.0.get_untracked()
    }

    fn set_state(&self, state: TabsState) {
        self.0.set(state);
    }
}

pub type ContainerController = TabsController<Option<ViewSettingsContext>, SignalState>;

/// Controller of one `Tabs` instance plus the signal its state lives in
pub fn connect(
    config: TabsConfig,
    view_settings: Option<ViewSettingsContext>,
) -> (ContainerController, RwSignal<TabsState>) {
    if let (Some(key), None) = (config.setting_key(), view_settings) {
        log::warn!(
            "tabs setting '{}' has no ViewSettingsProvider, selection is not persisted",
            key
        );
    }
    let controller = TabsController::with_state(config, view_settings, |initial| {
        SignalState(RwSignal::new(initial))
    });
    let state = controller.state_cell().0;
    (controller, state)
}

/// Row of tab headers plus the content of the active tab.
///
/// With `setting` the active index is read from and written to the view
/// settings, so it survives navigation and follows changes made by other
/// containers using the same key. Only the active tab's content is mounted,
/// and it stays mounted while other tabs come and go; nothing is rendered
/// while `tabs` has no present entry.
///
/// ```ignore
/// <Tabs setting="walletTab" tabs=vec![
///     tab("wallet.balances", || view! { <Balances /> }).ok(),
///     tab("History", || view! { <History /> }).ok(),
/// ] />
/// ```
#[component]
pub fn Tabs(
    /// Tabs in display order; `None` slots keep later indices stable
    #[prop(into)]
    tabs: Signal<TabList<ViewFn>>,
    /// View settings key remembering the active tab
    #[prop(optional, into)]
    setting: MaybeProp<String>,
    #[prop(optional)] default_active_tab: usize,
    #[prop(default = true)] segmented: bool,
    /// Additional CSS classes of the header row
    #[prop(optional, into)]
    tabs_class: MaybeProp<String>,
    /// Additional CSS classes of the content region
    #[prop(optional, into)]
    content_class: MaybeProp<String>,
    /// CSS classes of the outer element
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Inline style of the header row
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    let config = TabsConfig {
        setting: setting.get_untracked(),
        default_active_tab,
        segmented,
        ..TabsConfig::default()
    };
    let (controller, state) = connect(config, use_view_settings());
    // dropped, and so unsubscribed, with this component
    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        let key = setting.get();
        controller.update_value(|controller| controller.set_setting(key));
    });

    let on_select = Callback::new(move |index: usize| {
        tabs.with_untracked(|list| {
            controller.with_value(|controller| {
                controller.select(list, index);
            })
        });
    });

    let active_index = Memo::new(move |_| state.get().active_index());
    let has_tabs = Memo::new(move |_| tabs.with(|list| list.iter().any(Option::is_some)));
    let content_index = Memo::new(move |_| {
        let active = active_index.get();
        tabs.with(|list| layout(list, active).map(|current| current.content_index))
    });

    let dom_id = format!("tabs-{}", Uuid::new_v4().simple());

    let headers = {
        let dom_id = dom_id.clone();
        move || {
            let active = active_index.get();
            tabs.with(|list| {
                layout(list, active).map(|current| {
                    current
                        .headers
                        .iter()
                        .map(|header| {
                            view! {
                                <TabHeader
                                    title=header.title.clone()
                                    is_active=header.is_active
                                    index=header.index
                                    sub_text=header.sub_text.map(str::to_string)
                                    class=header.class_name.to_string()
                                    disabled=header.disabled
                                    on_select=on_select
                                    id_prefix=dom_id.clone()
                                />
                            }
                        })
                        .collect_view()
                })
            })
        }
    };

    // re-runs only when the displayed tab changes
    let content = move || {
        content_index.get().and_then(|index| {
            tabs.with_untracked(|list| {
                list.get(index)
                    .and_then(Option::as_ref)
                    .map(|tab| untrack(|| tab.content().run()))
            })
        })
    };

    move || {
        has_tabs.get().then(|| {
            let headers = headers.clone();
            let label_prefix = dom_id.clone();
            view! {
                <div class=move || class.get().unwrap_or_default()>
                    <div class="service-selector">
                        <ul
                            role="tablist"
                            style=move || style.get()
                            class=move || {
                                classes::header_row_class(
                                    &tabs_class.get().unwrap_or_default(),
                                    segmented,
                                )
                            }
                        >
                            {headers}
                        </ul>
                    </div>
                    <div
                        class=move || classes::content_class(&content_class.get().unwrap_or_default())
                        role="tabpanel"
                        id=panel_dom_id(&dom_id)
                        aria-labelledby=move || {
                            content_index.get().map(|index| header_dom_id(&label_prefix, index))
                        }
                    >
                        {content}
                    </div>
                </div>
            }
        })
    }
}
