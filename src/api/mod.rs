//! JavaScript-facing API for the div-table sorting module
//!
//! `helpers` holds the console logging and serialization plumbing shared by
//! the API surface; `core` holds the `Sortable` context and the exported
//! entry points.

pub mod core;
pub mod helpers;

// Re-export the public surface
pub use core::{init_sortable, Sortable};
