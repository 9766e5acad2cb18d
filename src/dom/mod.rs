//! Live-document plumbing: element selection, table discovery, control
//! handling, and the sort-and-reattach engine.

pub mod controls;
pub mod discover;
pub mod engine;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::error::SortError;
use crate::models::{ColumnType, Direction};

/// Registry entry for one discovered table.
///
/// The element is a non-owning handle into the live document; the entry is
/// filled once at discovery and only read afterwards.
pub(crate) struct TableState {
    pub element: Element,

    /// Recorded type per column position; `None` marks an unsortable column.
    pub data_types: Vec<Option<ColumnType>>,

    /// Injected controls, kept for selection-state sweeps.
    pub controls: Vec<SortControl>,
}

/// One injected control anchor.
pub(crate) struct SortControl {
    pub element: HtmlElement,
    pub col: usize,
    pub direction: Direction,
}

/// Table registry shared between the owning context and the click closures.
pub(crate) type SharedTables = Rc<RefCell<Vec<TableState>>>;

/// The global document, if the module runs in a window at all.
pub(crate) fn document() -> Result<Document, SortError> {
    web_sys::window()
        .ok_or(SortError::NoWindow)?
        .document()
        .ok_or(SortError::NoDocument)
}

/// Descendants of `root` matching `selector`, in document order. Selector
/// failures yield an empty set rather than an error.
pub(crate) fn select(root: &Element, selector: &str) -> Vec<Element> {
    collect(root.query_selector_all(selector).ok())
}

pub(crate) fn select_in_document(document: &Document, selector: &str) -> Vec<Element> {
    collect(document.query_selector_all(selector).ok())
}

fn collect(list: Option<NodeList>) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(element) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                elements.push(element);
            }
        }
    }
    elements
}
