//! Core enums and registry snapshots.

use serde::{Deserialize, Serialize};

use super::markup;

/// Direction of a sort control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Two-letter code embedded in control element ids.
    pub fn code(self) -> &'static str {
        match self {
            Direction::Up => "su",
            Direction::Down => "sd",
        }
    }

    /// Glyph entity shown by a control in this direction.
    pub fn glyph(self, selected: bool) -> &'static str {
        match (self, selected) {
            (Direction::Up, false) => markup::GLYPH_UP,
            (Direction::Down, false) => markup::GLYPH_DOWN,
            (Direction::Up, true) => markup::GLYPH_UP_SELECTED,
            (Direction::Down, true) => markup::GLYPH_DOWN_SELECTED,
        }
    }
}

/// Declared type of a sortable column.
///
/// The set is closed: everything a page can declare resolves to one of these
/// at discovery time, so comparator dispatch has no failure branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
}

impl ColumnType {
    /// Resolve a declared `data-type` tag. Absent and unrecognized tags both
    /// clamp to the numeric default, so a typo in the markup sorts that
    /// column numerically instead of disabling it.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("string") => ColumnType::String,
            _ => ColumnType::Number,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
        }
    }
}

/// Snapshot of one registered table (returned to JavaScript).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TableInfo {
    /// Table index in discovery order (0-based)
    pub table_index: usize,

    /// Recorded type per column position; `None` marks an unsortable column
    pub column_types: Vec<Option<ColumnType>>,

    /// Number of columns that carry sort controls
    pub sortable_columns: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_type_tag_defaults_to_number() {
        assert_eq!(ColumnType::from_tag(None), ColumnType::Number);
    }

    #[test]
    fn declared_tags_resolve_to_the_closed_set() {
        assert_eq!(ColumnType::from_tag(Some("string")), ColumnType::String);
        assert_eq!(ColumnType::from_tag(Some("number")), ColumnType::Number);
    }

    #[test]
    fn unknown_tags_clamp_to_number() {
        // an unrecognized tag must not disable the column
        assert_eq!(ColumnType::from_tag(Some("date")), ColumnType::Number);
        assert_eq!(ColumnType::from_tag(Some("")), ColumnType::Number);
    }

    #[test]
    fn direction_codes_and_glyphs_are_distinct() {
        assert_eq!(Direction::Up.code(), "su");
        assert_eq!(Direction::Down.code(), "sd");
        assert_ne!(Direction::Up.glyph(false), Direction::Up.glyph(true));
        assert_ne!(Direction::Up.glyph(false), Direction::Down.glyph(false));
        assert_ne!(Direction::Up.glyph(true), Direction::Down.glyph(true));
    }
}
