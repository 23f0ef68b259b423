use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab::TabButton;
use leptos::prelude::*;

/// Row of tab controls over the panels. The set is fixed; clicking a tab
/// moves the selection, which drives both `aria-selected` here and panel
/// visibility below.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs" role="tablist">
            <For
                each=move || tabs_store.tabs.get_value()
                key=|tab| tab.id
                children=move |tab| {
                    view! { <TabButton tab=tab /> }
                }
            />
        </div>
    }
}

/// Content panel tied to a tab by the labelling relation: it is visible
/// exactly while the tab whose id equals `labelled_by` is selected. Panels
/// stay mounted while hidden, so field values survive tab switches.
#[component]
pub fn TabPanel(labelled_by: &'static str, children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let is_active = Memo::new(move |_| tabs_store.is_active(labelled_by));

    view! {
        <section
            class="panel"
            class:active=is_active
            id=format!("{}-panel", labelled_by)
            role="tabpanel"
            aria-labelledby=labelled_by
        >
            {children()}
        </section>
    }
}
