//! Ordering of extracted (value, row) pairs.

use super::compare;
use crate::models::{ColumnType, Direction};

/// One extracted (value, row) pair, alive for a single sort operation.
///
/// The row payload is generic so ordering can be tested without a live
/// document; the engine instantiates it with row elements.
pub struct SortKey<R> {
    pub value: String,
    pub row: R,
}

/// Order body-row keys for one column.
///
/// Descending order is the ascending result reversed, never an independent
/// sort. Tie order is whatever the underlying sort yields.
pub fn order_rows<R>(
    mut keys: Vec<SortKey<R>>,
    ty: ColumnType,
    direction: Direction,
) -> Vec<SortKey<R>> {
    let cmp = compare::comparator(ty);
    keys.sort_by(|a, b| cmp(&a.value, &b.value));
    if direction == Direction::Down {
        keys.reverse();
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str, row: usize) -> SortKey<usize> {
        SortKey {
            value: value.to_string(),
            row,
        }
    }

    fn rows<R: Copy>(ordered: &[SortKey<R>]) -> Vec<R> {
        ordered.iter().map(|k| k.row).collect()
    }

    #[test]
    fn ascending_orders_rows_by_column_value() {
        let ordered = order_rows(
            vec![key("30", 0), key("5", 1), key("100", 2)],
            ColumnType::Number,
            Direction::Up,
        );
        assert_eq!(rows(&ordered), vec![1, 0, 2]);
    }

    #[test]
    fn descending_is_the_ascending_result_reversed() {
        let input = || vec![key("b", 0), key("a", 1), key("c", 2), key("a", 3)];
        let up = rows(&order_rows(input(), ColumnType::String, Direction::Up));
        let down = rows(&order_rows(input(), ColumnType::String, Direction::Down));
        let reversed: Vec<usize> = up.into_iter().rev().collect();
        assert_eq!(down, reversed);
    }

    #[test]
    fn empty_key_set_stays_empty() {
        let ordered = order_rows(Vec::<SortKey<usize>>::new(), ColumnType::Number, Direction::Down);
        assert!(ordered.is_empty());
    }
}
