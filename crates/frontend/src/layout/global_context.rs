use leptos::prelude::*;

/// One tab control. The tab id doubles as the labelling relation: the panel
/// whose `aria-labelledby` equals the id belongs to this tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTab {
    pub id: &'static str,
    pub title: &'static str,
}

/// App-wide UI state shared through context.
///
/// The tab set is fixed by markup; only the selection is reactive. Exactly one
/// tab is selected at any time, and the selection is not carried across
/// reloads.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: StoredValue<Vec<AuthTab>>,
    pub active: RwSignal<String>,
}

pub const LOGIN_TAB: &str = "login-tab";
pub const REGISTER_TAB: &str = "register-tab";

impl AppGlobalContext {
    pub fn new() -> Self {
        let tabs = vec![
            AuthTab {
                id: LOGIN_TAB,
                title: "Sign in",
            },
            AuthTab {
                id: REGISTER_TAB,
                title: "Create account",
            },
        ];
        Self {
            tabs: StoredValue::new(tabs),
            active: RwSignal::new(LOGIN_TAB.to_string()),
        }
    }

    pub fn select_tab(&self, id: &str) {
        leptos::logging::log!("select_tab: id='{}'", id);
        self.active.set(id.to_string());
    }

    /// Reactive: true when the given tab is the selected one
    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|active| active == id)
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
