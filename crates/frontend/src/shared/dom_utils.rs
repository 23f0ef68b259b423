//! Raw-DOM helpers for the few spots the component tree does not own.

use web_sys::window;

/// Fill an element's text content with a fallback when the markup left it
/// empty. Missing elements are skipped silently.
pub fn fill_empty_text(id: &str, fallback: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        log::debug!("fill_empty_text: no element with id '{}'", id);
        return;
    };
    let current = element.text_content().unwrap_or_default();
    if current.trim().is_empty() {
        element.set_text_content(Some(fallback));
    }
}
