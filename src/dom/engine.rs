//! The sort-and-reattach pass over one table.

use web_sys::HtmlElement;

use super::{controls, select, SharedTables, TableState};
use crate::error::SortError;
use crate::models::markup::{
    CLASS_LAST, SELECTOR_BODY_ROW, SELECTOR_BOTTOM_ROW, SELECTOR_CELL, VALUE_DEFAULT,
};
use crate::models::{ColumnType, Direction};
use crate::sort::{extract, order_rows, SortKey};

/// Click-path entry: sort, then update selection state.
///
/// Never surfaces an error; failures are logged and the document is left
/// as-is.
pub(crate) fn activate(
    tables: &SharedTables,
    table: usize,
    col: usize,
    direction: Direction,
    control: &HtmlElement,
) {
    let guard = match tables.try_borrow() {
        Ok(guard) => guard,
        Err(_) => {
            log::error!(
                "sort context already borrowed; dropping activation for table {} column {}",
                table,
                col
            );
            return;
        }
    };
    let state = match guard.get(table) {
        Some(state) => state,
        None => {
            log::error!("activation for unregistered table {}", table);
            return;
        }
    };

    if let Err(err) = apply_sort(state, col, direction) {
        log::error!("sorting table {} column {} failed: {}", table, col, err);
        return;
    }
    controls::set_selected(state, control, direction);
}

/// Reorder one table's body rows by the given column.
///
/// Bottom rows are detached first and re-appended last, so they stay pinned
/// to the end in their original relative order. Row elements are relocated,
/// never rebuilt, and no cell outside the sorted column is read or written.
pub(crate) fn apply_sort(
    state: &TableState,
    col: usize,
    direction: Direction,
) -> Result<(), SortError> {
    let table = &state.element;

    let bottom_rows = select(table, SELECTOR_BOTTOM_ROW);
    for row in &bottom_rows {
        row.remove();
    }

    let mut keys = Vec::new();
    for row in select(table, SELECTOR_BODY_ROW) {
        let cells = select(&row, SELECTOR_CELL);
        let value = match cells.get(col) {
            Some(cell) => extract::cell_value(cell),
            None => VALUE_DEFAULT.to_string(),
        };
        keys.push(SortKey { value, row });
    }

    // A column with no recorded type (unsortable, or past the header) falls
    // back to the numeric default.
    let ty = state
        .data_types
        .get(col)
        .copied()
        .flatten()
        .unwrap_or(ColumnType::Number);
    let ordered = order_rows(keys, ty, direction);

    for key in &ordered {
        key.row.class_list().remove_1(CLASS_LAST).ok();
        key.row.remove();
    }
    if let Some(last) = ordered.last() {
        last.row
            .class_list()
            .add_1(CLASS_LAST)
            .map_err(SortError::from_js)?;
    }
    for key in &ordered {
        table.append_child(&key.row).map_err(SortError::from_js)?;
    }
    for row in &bottom_rows {
        table.append_child(row).map_err(SortError::from_js)?;
    }

    Ok(())
}
