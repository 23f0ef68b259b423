use contracts::auth::Banner;
use leptos::prelude::*;

/// Summary status region under a form. Hidden until the first submit attempt;
/// each attempt overwrites the previous text and status wholesale.
#[component]
pub fn FormBanner(
    /// Current banner, if any submit attempt happened yet
    #[prop(into)]
    banner: Signal<Option<Banner>>,
    /// ID for the banner element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let banner_id = move || id.get().unwrap_or_default();
    let is_hidden = move || banner.get().is_none();
    let is_error = move || banner.get().map(|b| b.is_error()).unwrap_or(false);
    let text = move || banner.get().map(|b| b.text).unwrap_or_default();

    view! {
        <div
            id=banner_id
            class="banner"
            class=("is-hidden", is_hidden)
            class:error=is_error
            role="status"
        >
            {text}
        </div>
    }
}
