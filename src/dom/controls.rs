//! Sort-control construction and selection state.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::TableState;
use crate::error::SortError;
use crate::models::markup::{control_id, ATTR_NOBLOCK, CLASS_SORT_LINK};
use crate::models::Direction;

/// Build one sort control for a header cell.
///
/// The anchor starts in the unselected state; discovery wires its click
/// listener after attaching it.
pub(crate) fn build_sort_link(
    document: &Document,
    table: usize,
    col: usize,
    direction: Direction,
) -> Result<HtmlElement, SortError> {
    let link: HtmlElement = document
        .create_element("a")
        .map_err(SortError::from_js)?
        .dyn_into()
        .map_err(|_| SortError::Dom("anchor did not cast to HtmlElement".into()))?;

    link.set_id(&control_id(direction, table, col));
    link.set_class_name(CLASS_SORT_LINK);
    link.set_attribute("href", "#").map_err(SortError::from_js)?;
    link.set_attribute(ATTR_NOBLOCK, "true")
        .map_err(SortError::from_js)?;
    link.set_inner_html(direction.glyph(false));

    Ok(link)
}

/// Reset every control of the table to its unselected glyph, then mark the
/// activated one selected. Exactly one control per table ends up selected.
pub(crate) fn set_selected(state: &TableState, activated: &HtmlElement, direction: Direction) {
    for control in &state.controls {
        control.element.set_inner_html(control.direction.glyph(false));
    }
    activated.set_inner_html(direction.glyph(true));
}
