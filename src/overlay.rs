use crate::constants::{LANDING_ID, SELECTOR_ID};
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without the stylesheet
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
fn is_hidden(document: &web::Document, id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(id) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

/// Landing view visible, selector hidden.
pub fn show_landing(document: &web::Document) {
    show(document, LANDING_ID);
    hide(document, SELECTOR_ID);
}

/// Swap the landing view for the event selector.
pub fn show_selector(document: &web::Document) {
    hide(document, LANDING_ID);
    show(document, SELECTOR_ID);
}

pub fn selector_visible(document: &web::Document) -> bool {
    !is_hidden(document, SELECTOR_ID)
}
