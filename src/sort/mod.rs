//! Pure sorting core: value extraction, comparators, and row ordering.
//!
//! Nothing in here touches the live document beyond thin cell readers; the
//! ordering logic is generic over the row payload so it can be exercised
//! without a browser.

pub mod compare;
pub mod extract;
pub mod order;

pub use extract::{cell_value, resolve_value};
pub use order::{order_rows, SortKey};
