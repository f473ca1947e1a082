/// Show/hide the checklist body that follows a subheading

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::error::ChecklistError;

pub const SHOWN: &str = "block";
pub const HIDDEN: &str = "none";

/// Display value after a toggle. Anything other than "block", including an
/// unset (empty) display, counts as hidden.
pub fn next_display(current: &str) -> &'static str {
    if current == SHOWN { HIDDEN } else { SHOWN }
}

/// An element whose inline display can be read and written.
pub trait Collapsible {
    fn display(&self) -> String;
    fn set_display(&self, value: &str) -> Result<(), ChecklistError>;
}

impl Collapsible for HtmlElement {
    fn display(&self) -> String {
        self.style().get_property_value("display").unwrap_or_default()
    }

    fn set_display(&self, value: &str) -> Result<(), ChecklistError> {
        self.style()
            .set_property("display", value)
            .map_err(|e| ChecklistError::Dom(format!("{:?}", e)))
    }
}

/// Flip `body` between shown and hidden, returning the new display value.
pub fn toggle<C: Collapsible + ?Sized>(body: &C) -> Result<&'static str, ChecklistError> {
    let next = next_display(&body.display());
    body.set_display(next)?;
    Ok(next)
}

/// The checklist body belonging to `header`: its next element sibling.
pub fn section_body(header: &Element) -> Result<HtmlElement, ChecklistError> {
    header
        .next_element_sibling()
        .ok_or(ChecklistError::MissingSibling)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ChecklistError::Dom("section body is not an HTML element".to_string()))
}

pub fn toggle_subheading(header: &Element) -> Result<&'static str, ChecklistError> {
    let body = section_body(header)?;
    let next = toggle(&body)?;
    log::debug!("subheading {:?} -> display {}", header.text_content(), next);
    Ok(next)
}
