//! Markup vocabulary shared with the host page.
//!
//! Selectors and attributes consumed from the page, plus the classes, ids,
//! and glyphs this module writes back into it.

use super::Direction;

/// Container marking a sortable div-table.
pub const SELECTOR_SORTABLE_TABLE: &str = "div.table.sortable";
pub const SELECTOR_HEADER_ROW: &str = "div.header.row";
pub const SELECTOR_BODY_ROW: &str = "div.body.row";
pub const SELECTOR_BOTTOM_ROW: &str = "div.bottom.row";
pub const SELECTOR_CELL: &str = "div.cell";

/// Header-cell attribute suppressing control injection for that column.
pub const ATTR_UNSORTABLE: &str = "data-unsortable";
/// Header-cell attribute declaring the column type ("string" or "number").
pub const ATTR_TYPE: &str = "data-type";
/// Body-cell attribute preferred over the rendered text as the sort value.
pub const ATTR_VALUE: &str = "data-value";
/// Carried on injected links for the host page's click plumbing.
pub const ATTR_NOBLOCK: &str = "data-noblock";

/// Class of injected control anchors.
pub const CLASS_SORT_LINK: &str = "sortlink";
/// Class marking the terminal body row.
pub const CLASS_LAST: &str = "last";

/// Fallback value when a cell has no override and no rendered text.
pub const VALUE_DEFAULT: &str = "0";

/// Spacing inserted around controls in a header cell.
pub const NBSP: &str = "\u{a0}";
pub const DOUBLE_NBSP: &str = "\u{a0}\u{a0}";

// Unselected and selected glyph entities for the two control directions.
pub const GLYPH_UP: &str = "&#x25b3;";
pub const GLYPH_DOWN: &str = "&#x25bd;";
pub const GLYPH_UP_SELECTED: &str = "&#x25b2;";
pub const GLYPH_DOWN_SELECTED: &str = "&#x25bc;";

/// Synthetic id for one control: `<code>_<table>_<col>`.
///
/// Unique within the document as long as initialization runs once. The id is
/// write-only markup; click handling never parses it back.
pub fn control_id(direction: Direction, table: usize, col: usize) -> String {
    format!("{}_{}_{}", direction.code(), table, col)
}
