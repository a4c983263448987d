use crate::constants::{
    LANDING_ID, LAUNCH_BUTTON_ID, LAUNCH_LABEL, PAGE_TITLE, SELECT_ID, SELECT_LABEL, SELECTOR_ID,
};
use moon_core::Catalog;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn select_element(document: &web::Document) -> Option<web::HtmlSelectElement> {
    document
        .get_element_by_id(SELECT_ID)?
        .dyn_into::<web::HtmlSelectElement>()
        .ok()
}

/// Set the landing heading and launch button text.
pub fn populate_landing(document: &web::Document) {
    if let Some(title) = document
        .get_element_by_id(LANDING_ID)
        .and_then(|el| el.query_selector("h1").ok().flatten())
    {
        title.set_text_content(Some(PAGE_TITLE));
    }
    if let Some(button) = document.get_element_by_id(LAUNCH_BUTTON_ID) {
        button.set_text_content(Some(LAUNCH_LABEL));
    }
    document.set_title(PAGE_TITLE);
}

/// Fill the selector label and one `<option>` per event, valued by catalog index.
pub fn populate_selector(document: &web::Document, catalog: &Catalog) -> anyhow::Result<()> {
    if let Some(label) = document
        .get_element_by_id(SELECTOR_ID)
        .and_then(|el| el.query_selector(".dropdown-text").ok().flatten())
    {
        label.set_text_content(Some(SELECT_LABEL));
    }
    let select = select_element(document)
        .ok_or_else(|| anyhow::anyhow!("missing #{SELECT_ID}"))?;
    select.set_inner_html("");
    for (i, event) in catalog.iter().enumerate() {
        let option = web::HtmlOptionElement::new_with_text_and_value(&event.timestamp, &i.to_string())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        select
            .append_child(&option)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }
    Ok(())
}

/// Catalog index of the currently selected option.
pub fn selected_index(select: &web::HtmlSelectElement) -> Option<usize> {
    select.value().parse().ok()
}
