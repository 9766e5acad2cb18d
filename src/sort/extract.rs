//! Sortable-value and column-type extraction from cells.

use web_sys::Element;

use crate::models::markup::{ATTR_TYPE, ATTR_VALUE, VALUE_DEFAULT};
use crate::models::ColumnType;

/// Resolve the sortable value from a declared override and the rendered
/// text. The chain is override → text → `"0"`, where the empty string counts
/// as absent at every step: a deliberately empty `data-value` falls through
/// exactly like a missing one.
pub fn resolve_value(attr: Option<String>, text: Option<String>) -> String {
    attr.filter(|value| !value.is_empty())
        .or_else(|| text.filter(|text| !text.is_empty()))
        .unwrap_or_else(|| VALUE_DEFAULT.to_string())
}

/// Sortable value of one body cell.
pub fn cell_value(cell: &Element) -> String {
    resolve_value(cell.get_attribute(ATTR_VALUE), cell.text_content())
}

/// Declared type of one header cell.
pub fn cell_type(cell: &Element) -> ColumnType {
    ColumnType::from_tag(cell.get_attribute(ATTR_TYPE).as_deref())
}
