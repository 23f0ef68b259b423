use leptos::prelude::*;

/// Masked input with a Show/Hide visibility toggle and inline error support.
///
/// The toggle is a binary flip: it switches the input type between "password"
/// and "text" and mirrors the state in its own label, so toggling twice
/// restores both.
#[component]
pub fn PasswordInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Field name within the form
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Validation error message; empty means the field is fine
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    let input_id = move || id.get().unwrap_or_default();
    let input_name = move || name.get().unwrap_or_default();
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let input_type = move || if visible.get() { "text" } else { "password" };
    let toggle_label = move || if visible.get() { "Hide" } else { "Show" };
    let error_text = move || error.get().unwrap_or_default();
    let has_error = move || !error_text().is_empty();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <div class="form__input-row">
                <input
                    id=input_id
                    class="form__input"
                    class=("form__input--invalid", has_error)
                    type=input_type
                    name=input_name
                    value=move || value.get()
                    autocomplete=input_autocomplete
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                <button
                    type="button"
                    class="toggle-visibility"
                    aria-controls=input_id
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {toggle_label}
                </button>
            </div>
            <p class="field-error" role="alert">{error_text}</p>
        </div>
    }
}
