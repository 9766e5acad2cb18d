//! One-shot document scan: finds sortable tables, numbers their columns,
//! injects controls, and wires click activation.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::controls::build_sort_link;
use super::{engine, select, select_in_document, SharedTables, SortControl, TableState};
use crate::error::SortError;
use crate::models::markup::{
    ATTR_UNSORTABLE, DOUBLE_NBSP, NBSP, SELECTOR_CELL, SELECTOR_HEADER_ROW,
    SELECTOR_SORTABLE_TABLE,
};
use crate::models::Direction;
use crate::sort::extract;

/// Everything discovery produces: the shared registry and the closures that
/// keep the installed click listeners alive.
pub(crate) struct Discovery {
    pub tables: SharedTables,
    pub closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

/// Scan the document once.
///
/// Not idempotent: scanning again injects a second set of controls into
/// every sortable header cell.
pub(crate) fn scan_document(document: &Document) -> Result<Discovery, SortError> {
    let tables: SharedTables = Rc::new(RefCell::new(Vec::new()));
    let mut closures = Vec::new();

    for (table_index, table_element) in select_in_document(document, SELECTOR_SORTABLE_TABLE)
        .into_iter()
        .enumerate()
    {
        let mut data_types = Vec::new();
        let mut table_controls = Vec::new();
        // One running counter per table, continuing across header rows and
        // counting unsortable cells, so column numbers stay aligned with
        // body-row cells.
        let mut col = 0;

        for header_row in select(&table_element, SELECTOR_HEADER_ROW) {
            for cell in select(&header_row, SELECTOR_CELL) {
                if cell.get_attribute(ATTR_UNSORTABLE).as_deref() == Some("true") {
                    data_types.push(None);
                    col += 1;
                    continue;
                }

                append_text(document, &cell, NBSP)?;
                for direction in [Direction::Down, Direction::Up] {
                    let link = build_sort_link(document, table_index, col, direction)?;
                    cell.append_child(&link).map_err(SortError::from_js)?;
                    closures.push(wire_activation(&tables, &link, table_index, col, direction));
                    table_controls.push(SortControl {
                        element: link,
                        col,
                        direction,
                    });
                }
                append_text(document, &cell, DOUBLE_NBSP)?;

                data_types.push(Some(extract::cell_type(&cell)));
                col += 1;
            }
        }

        log::debug!(
            "registered sortable table {} with {} columns",
            table_index,
            col
        );
        tables.borrow_mut().push(TableState {
            element: table_element,
            data_types,
            controls: table_controls,
        });
    }

    Ok(Discovery { tables, closures })
}

/// Install the click listener for one control. The closure captures the
/// control's (table, col, direction) tuple and the activated anchor itself;
/// nothing re-derives identity from the DOM.
fn wire_activation(
    tables: &SharedTables,
    link: &HtmlElement,
    table: usize,
    col: usize,
    direction: Direction,
) -> Closure<dyn FnMut(MouseEvent)> {
    let tables = Rc::clone(tables);
    let anchor = link.clone();
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        event.prevent_default();
        engine::activate(&tables, table, col, direction, &anchor);
    }) as Box<dyn FnMut(MouseEvent)>);

    link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .ok();
    closure
}

fn append_text(document: &Document, cell: &Element, text: &str) -> Result<(), SortError> {
    cell.append_child(&document.create_text_node(text))
        .map_err(SortError::from_js)?;
    Ok(())
}
