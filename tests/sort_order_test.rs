// Ordering behavior of the pure sort core, exercised without a browser.

use divsort_wasm::models::{ColumnType, Direction};
use divsort_wasm::sort::{order_rows, resolve_value, SortKey};

fn keys(pairs: &[(&str, &str)]) -> Vec<SortKey<String>> {
    pairs
        .iter()
        .map(|(value, row)| SortKey {
            value: value.to_string(),
            row: row.to_string(),
        })
        .collect()
}

fn row_order(ordered: &[SortKey<String>]) -> Vec<&str> {
    ordered.iter().map(|k| k.row.as_str()).collect()
}

#[test]
fn numeric_ascending_orders_rows_by_value() {
    let ordered = order_rows(
        keys(&[("30", "r30"), ("5", "r5"), ("100", "r100")]),
        ColumnType::Number,
        Direction::Up,
    );
    assert_eq!(row_order(&ordered), vec!["r5", "r30", "r100"]);
}

#[test]
fn numeric_descending_is_the_ascending_order_reversed() {
    let input = [("30", "r30"), ("5", "r5"), ("100", "r100"), ("7", "r7")];
    let up = order_rows(keys(&input), ColumnType::Number, Direction::Up);
    let down = order_rows(keys(&input), ColumnType::Number, Direction::Down);

    let mut reversed: Vec<&str> = row_order(&up);
    reversed.reverse();
    assert_eq!(row_order(&down), reversed);
    assert_eq!(row_order(&down), vec!["r100", "r30", "r7", "r5"]);
}

#[test]
fn string_ascending_uses_native_ordering() {
    let ordered = order_rows(
        keys(&[("banana", "b"), ("Apple", "a"), ("cherry", "c")]),
        ColumnType::String,
        Direction::Up,
    );
    let values: Vec<&str> = ordered.iter().map(|k| k.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["Apple", "banana", "cherry"],
        "capitals order before lowercase under native ordering"
    );
}

#[test]
fn adjacent_numeric_pairs_are_non_decreasing() {
    let input = [
        ("12", "a"),
        ("-3", "b"),
        ("0.5", "c"),
        ("100", "d"),
        ("7", "e"),
        ("7", "f"),
    ];
    let ordered = order_rows(keys(&input), ColumnType::Number, Direction::Up);

    let parsed: Vec<f64> = ordered.iter().map(|k| k.value.parse().unwrap()).collect();
    for pair in parsed.windows(2) {
        assert!(pair[0] <= pair[1], "expected {} <= {}", pair[0], pair[1]);
    }
}

#[test]
fn missing_value_and_text_default_to_zero() {
    assert_eq!(resolve_value(None, Some(String::new())), "0");

    // the defaulted value sorts like a legitimate zero
    let ordered = order_rows(
        keys(&[("12", "twelve"), ("0", "blank"), ("-4", "minus")]),
        ColumnType::Number,
        Direction::Up,
    );
    assert_eq!(row_order(&ordered), vec!["minus", "blank", "twelve"]);
}

#[test]
fn unknown_declared_type_clamps_to_number_and_keeps_rows() {
    let ty = ColumnType::from_tag(Some("date"));
    assert_eq!(ty, ColumnType::Number);

    let ordered = order_rows(
        keys(&[("3", "r3"), ("1", "r1"), ("2", "r2")]),
        ty,
        Direction::Up,
    );
    assert_eq!(ordered.len(), 3, "no row may be dropped by an unknown tag");
    assert_eq!(row_order(&ordered), vec!["r1", "r2", "r3"]);
}
