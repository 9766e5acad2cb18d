//! Core WASM API: initialization and the `Sortable` context.
//!
//! `initSortable` scans the page once and hands the caller a context that
//! owns the table registry and every installed click handler. JavaScript
//! keeps the context for the lifetime of the page view and may also drive
//! sorting programmatically through it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::helpers;
use crate::dom::{self, controls, discover, engine, SharedTables};
use crate::error::SortError;
use crate::models::{Direction, TableInfo};
use crate::{wasm_info, wasm_log};

/// Owned sorting context returned by [`init_sortable`].
///
/// Holds the per-table registry and keeps the click closures alive; dropping
/// it leaves the injected markup in place but the controls stop responding.
#[wasm_bindgen]
pub struct Sortable {
    tables: SharedTables,
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

/// Scan the document for sortable tables and install sort controls on their
/// header cells.
///
/// Run once after the document is ready. Scanning is not idempotent: calling
/// this again injects a second set of controls and returns a separate
/// context.
#[wasm_bindgen(js_name = initSortable)]
pub fn init_sortable() -> Result<Sortable, JsValue> {
    let document = dom::document()?;
    let discovery = discover::scan_document(&document)?;
    wasm_info!(
        "initSortable registered {} sortable table(s)",
        discovery.tables.borrow().len()
    );

    Ok(Sortable {
        tables: discovery.tables,
        closures: discovery.closures,
    })
}

#[wasm_bindgen]
impl Sortable {
    /// Number of sortable tables discovered at initialization.
    #[wasm_bindgen(js_name = tableCount)]
    pub fn table_count(&self) -> usize {
        self.tables.borrow().len()
    }

    /// Sort a table ascending by one column, as if its up control had been
    /// clicked. Selection state follows the sort.
    #[wasm_bindgen(js_name = sortUp)]
    pub fn sort_up(&self, table: usize, col: usize) -> Result<(), JsValue> {
        self.sort(table, col, Direction::Up)
    }

    /// Sort a table descending by one column: the ascending order, reversed.
    #[wasm_bindgen(js_name = sortDown)]
    pub fn sort_down(&self, table: usize, col: usize) -> Result<(), JsValue> {
        self.sort(table, col, Direction::Down)
    }

    /// Recorded column types for one table; unsortable columns are `null`.
    #[wasm_bindgen(js_name = columnTypes)]
    pub fn column_types(&self, table: usize) -> Result<js_sys::Array, JsValue> {
        let tables = self.tables.borrow();
        let state = tables.get(table).ok_or(SortError::TableOutOfRange {
            index: table,
            count: tables.len(),
        })?;

        let types = js_sys::Array::new();
        for ty in &state.data_types {
            let value = match ty {
                Some(ty) => JsValue::from_str(ty.as_str()),
                None => JsValue::NULL,
            };
            types.push(&value);
        }
        Ok(types)
    }

    /// Structured snapshot of the registry for inspector UIs.
    #[wasm_bindgen(js_name = tablesSnapshot)]
    pub fn tables_snapshot(&self) -> Result<JsValue, JsValue> {
        helpers::serialize(&self.table_infos(), "Failed to serialize table snapshot")
    }

    /// The same snapshot as a pretty JSON string, for console debugging.
    #[wasm_bindgen(js_name = describeTables)]
    pub fn describe_tables(&self) -> Result<String, JsValue> {
        serde_json::to_string_pretty(&self.table_infos())
            .map_err(|e| helpers::validation_error(format!("Failed to encode table snapshot: {}", e)))
    }
}

impl Sortable {
    fn sort(&self, table: usize, col: usize, direction: Direction) -> Result<(), JsValue> {
        wasm_log!("sort requested: table {} column {} {:?}", table, col, direction);

        let tables = self.tables.try_borrow().map_err(|_| SortError::Busy)?;
        let state = tables.get(table).ok_or(SortError::TableOutOfRange {
            index: table,
            count: tables.len(),
        })?;
        if col >= state.data_types.len() {
            return Err(SortError::ColumnOutOfRange {
                table,
                index: col,
                count: state.data_types.len(),
            }
            .into());
        }

        engine::apply_sort(state, col, direction)?;

        // Programmatic sorts move the selection exactly like a click would.
        if let Some(control) = state
            .controls
            .iter()
            .find(|c| c.col == col && c.direction == direction)
        {
            controls::set_selected(state, &control.element, direction);
        }
        Ok(())
    }

    fn table_infos(&self) -> Vec<TableInfo> {
        self.tables
            .borrow()
            .iter()
            .enumerate()
            .map(|(index, state)| TableInfo {
                table_index: index,
                column_types: state.data_types.clone(),
                sortable_columns: state.data_types.iter().filter(|t| t.is_some()).count(),
            })
            .collect()
    }
}
