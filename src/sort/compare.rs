//! The two column comparators and their dispatch.

use std::cmp::Ordering;

use crate::models::ColumnType;

/// Pick the comparator for a column's recorded type.
///
/// The type set is closed, so the dispatch has no failure branch; a column
/// whose markup declared something unrecognized was already clamped to
/// `Number` at discovery.
pub fn comparator(ty: ColumnType) -> fn(&str, &str) -> Ordering {
    match ty {
        ColumnType::Number => cmp_number,
        ColumnType::String => cmp_string,
    }
}

/// Ascending numeric comparison with native-style coercion: the empty string
/// counts as zero, surrounding whitespace is ignored, and anything
/// unparseable becomes NaN with no guaranteed position.
pub fn cmp_number(a: &str, b: &str) -> Ordering {
    coerce(a).partial_cmp(&coerce(b)).unwrap_or(Ordering::Equal)
}

fn coerce(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Ascending three-way string comparison under native ordering, not locale
/// collation. Capitals order before lowercase.
pub fn cmp_string(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}
