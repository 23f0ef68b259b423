use crate::layout::global_context::{AppGlobalContext, AuthTab};
use leptos::prelude::*;

#[component]
pub fn TabButton(tab: AuthTab) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tab_id = tab.id;
    let is_active = Memo::new(move |_| tabs_store.is_active(tab_id));

    let on_click = move |_| tabs_store.select_tab(tab_id);

    view! {
        <button
            type="button"
            class="tab-btn"
            class:active=is_active
            id=tab_id
            role="tab"
            aria-selected=move || is_active.get().to_string()
            aria-controls=format!("{}-panel", tab_id)
            on:click=on_click
        >
            {tab.title}
        </button>
    }
}
