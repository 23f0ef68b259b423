use contracts::auth::register::{self, RegistrationErrors, RegistrationForm};
use contracts::auth::Banner;
use leptos::prelude::*;

use crate::shared::components::banner::FormBanner;
use crate::shared::components::strength_meter::StrengthMeter;
use crate::shared::components::ui::{Button, Checkbox, Input, PasswordInput, Select};

fn role_options() -> Vec<(String, String)> {
    [
        ("", "Choose your role"),
        ("admin", "Administrator"),
        ("manager", "Manager"),
        ("engineer", "Engineer"),
        ("analyst", "Analyst"),
        ("other", "Other"),
    ]
    .into_iter()
    .map(|(value, label)| (value.to_string(), label.to_string()))
    .collect()
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (role, set_role) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (consent, set_consent) = create_signal(false);

    let (errors, set_errors) = create_signal(RegistrationErrors::default());
    let (banner, set_banner) = create_signal(Option::<Banner>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = RegistrationForm {
            name: name.get(),
            email: email.get(),
            company: company.get(),
            role: role.get(),
            password: password.get(),
            confirm: confirm.get(),
            consent: consent.get(),
        };
        let outcome = register::validate(&form);
        log::debug!("registration attempt: valid={}", outcome.errors.is_empty());

        set_errors.set(outcome.errors);
        set_banner.set(Some(outcome.banner));
    };

    view! {
        <form id="register-form" on:submit=on_submit novalidate>
            <Input
                label="Full name"
                id="register-name"
                name="name"
                autocomplete="name"
                value=name
                on_input=Callback::new(move |v| set_name.set(v))
                error=Signal::derive(move || errors.get().name)
            />

            <Input
                label="Work email"
                id="register-email"
                name="email"
                input_type="email"
                placeholder="you@company.com"
                autocomplete="email"
                value=email
                on_input=Callback::new(move |v| set_email.set(v))
                error=Signal::derive(move || errors.get().email)
            />

            <Input
                label="Company"
                id="register-company"
                name="company"
                autocomplete="organization"
                value=company
                on_input=Callback::new(move |v| set_company.set(v))
                error=Signal::derive(move || errors.get().company)
            />

            <Select
                label="Role"
                id="register-role"
                name="role"
                value=role
                options=Signal::derive(role_options)
                on_change=Callback::new(move |v| set_role.set(v))
                error=Signal::derive(move || errors.get().role)
            />

            <PasswordInput
                label="Password"
                id="register-password"
                name="password"
                autocomplete="new-password"
                value=password
                on_input=Callback::new(move |v| set_password.set(v))
                error=Signal::derive(move || errors.get().password)
            />

            <StrengthMeter password=password />

            <PasswordInput
                label="Confirm password"
                id="confirm-password"
                name="confirm"
                autocomplete="new-password"
                value=confirm
                on_input=Callback::new(move |v| set_confirm.set(v))
                error=Signal::derive(move || errors.get().confirm)
            />

            <Checkbox
                label=Signal::derive(|| "I agree to the terms of service".to_string())
                id="consent"
                name="consent"
                checked=consent
                on_change=Callback::new(move |v| set_consent.set(v))
                error=Signal::derive(move || errors.get().consent)
            />

            <Button button_type="submit">"Create account"</Button>

            <FormBanner id="register-banner" banner=banner />
        </form>
    }
}
