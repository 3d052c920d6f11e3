//! Browser Helpers
//!
//! Small imperative bits the declarative views cannot express.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}

/// Smooth-scroll so the section starts just below the fixed navbar
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(section) = document
        .get_element_by_id(section_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("no section #{section_id}");
        return;
    };

    let nav_height = document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0, |nav| nav.offset_height());

    let options = ScrollToOptions::new();
    options.set_top(f64::from(section.offset_top() - nav_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
