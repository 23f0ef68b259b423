use leptos::prelude::*;

/// Checkbox component with inline error support
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Field name within the form
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Validation error message; empty means the field is fine
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let checkbox_name = move || name.get().unwrap_or_default();
    let error_text = move || error.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <div class="form__checkbox-wrapper">
                <input
                    id=checkbox_id
                    type="checkbox"
                    class="form__checkbox"
                    name=checkbox_name
                    checked=move || checked.get()
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                <label class="form__checkbox-label" for=checkbox_id>
                    {label}
                </label>
            </div>
            <p class="field-error" role="alert">{error_text}</p>
        </div>
    }
}
