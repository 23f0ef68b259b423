use leptos::prelude::*;

use crate::layout::global_context::{LOGIN_TAB, REGISTER_TAB};
use crate::layout::tabs::{TabBar, TabPanel};
use crate::shared::dom_utils;
use crate::system::pages::login::LoginPanel;
use crate::system::pages::register::RegisterPanel;

#[component]
pub fn AuthPortal() -> impl IntoView {
    // The portal name is filled in after mount when the markup left it empty.
    Effect::new(move |_| {
        dom_utils::fill_empty_text("portal-name", "Unnamed");
    });

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1 id="portal-name"></h1>
                <p class="login-subtitle">"Sign in to your workspace or create a new account."</p>

                <TabBar />

                <TabPanel labelled_by=LOGIN_TAB>
                    <LoginPanel />
                </TabPanel>
                <TabPanel labelled_by=REGISTER_TAB>
                    <RegisterPanel />
                </TabPanel>

                <div class="login-info">
                    <p>"Demo build: submissions stay in the browser."</p>
                </div>
            </div>
        </div>
    }
}
