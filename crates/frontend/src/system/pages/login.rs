use contracts::auth::login::{self, LoginErrors, LoginForm};
use contracts::auth::Banner;
use leptos::prelude::*;

use crate::shared::components::banner::FormBanner;
use crate::shared::components::ui::{Button, Input, PasswordInput};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (errors, set_errors) = create_signal(LoginErrors::default());
    let (banner, set_banner) = create_signal(Option::<Banner>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        let outcome = login::validate(&form);
        log::debug!("sign-in attempt: valid={}", outcome.errors.is_empty());

        set_errors.set(outcome.errors);
        set_banner.set(Some(outcome.banner));
    };

    let on_forgot_password = move |_| {
        set_banner.set(Some(login::reset_link_banner()));
    };

    view! {
        <form id="login-form" on:submit=on_submit novalidate>
            <Input
                label="Work email"
                id="login-email"
                name="email"
                input_type="email"
                placeholder="you@company.com"
                autocomplete="email"
                value=email
                on_input=Callback::new(move |v| set_email.set(v))
                error=Signal::derive(move || errors.get().email)
            />

            <PasswordInput
                label="Password"
                id="login-password"
                name="password"
                autocomplete="current-password"
                value=password
                on_input=Callback::new(move |v| set_password.set(v))
                error=Signal::derive(move || errors.get().password)
            />

            <Button button_type="submit">"Sign in"</Button>
            <Button
                variant="ghost"
                id="forgot-password-btn"
                on_click=Callback::new(on_forgot_password)
            >
                "Forgot password?"
            </Button>

            <FormBanner id="login-banner" banner=banner />
        </form>
    }
}
