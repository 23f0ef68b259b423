use contracts::auth::password::{
    strength_percent, strength_score, unsatisfied_labels, StrengthLevel,
};
use leptos::prelude::*;

/// Live strength feedback for the registration password field.
///
/// The score is recomputed from the full rule set on every input change; the
/// fill width, fill color and tier label all derive from it.
#[component]
pub fn StrengthMeter(
    /// The password being typed
    #[prop(into)]
    password: Signal<String>,
) -> impl IntoView {
    let score = Memo::new(move |_| strength_score(&password.get()));
    let level = move || StrengthLevel::from_score(score.get());

    view! {
        <div class="strength-meter">
            <div class="strength-bar">
                <div
                    class="strength-fill"
                    style:width=move || format!("{}%", strength_percent(score.get()))
                    style:background=move || level().css_color()
                ></div>
            </div>
            <span class="strength-label">{move || level().as_str()}</span>
            <ul class="strength-checklist">
                <For
                    each=move || unsatisfied_labels(&password.get())
                    key=|label| *label
                    children=move |label| {
                        view! { <li>{label}</li> }
                    }
                />
            </ul>
        </div>
    }
}
