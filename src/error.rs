//! Crate error type, converted to `JsValue` strings at the API boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures the sorting module can run into.
///
/// The click-driven path logs and swallows these; only the explicit
/// JavaScript API surfaces them.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("no `document` on the global window")]
    NoDocument,

    #[error("table index {index} out of bounds ({count} tables registered)")]
    TableOutOfRange { index: usize, count: usize },

    #[error("column index {index} out of bounds for table {table} ({count} columns)")]
    ColumnOutOfRange {
        table: usize,
        index: usize,
        count: usize,
    },

    #[error("sort context is already borrowed")]
    Busy,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl SortError {
    /// Wrap a raw JavaScript exception from a DOM call.
    pub(crate) fn from_js(value: JsValue) -> Self {
        SortError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SortError> for JsValue {
    fn from(err: SortError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
