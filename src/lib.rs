//! Div-table sorting WASM Module
//!
//! Scans the live document for `div.table.sortable` blocks, injects
//! ascending/descending controls into their header cells, and reorders body
//! rows in place when a control is activated.

pub mod api;
pub mod dom;
pub mod error;
pub mod models;
pub mod sort;

// Re-export commonly used types
pub use error::SortError;
pub use models::{ColumnType, Direction, TableInfo};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("div-table sorting WASM module initialized");
}
