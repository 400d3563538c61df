//! Type-aware comparison and stable ordering.

use std::cmp::Ordering;

use tabview_model::{Record, SortDirection, Value};

use crate::classify::numeric_value;

/// Precomputed comparison key for one cell.
///
/// Values with a numeric reading order before the rest and compare
/// numerically among themselves; everything else compares by raw text,
/// case-sensitively by code point. Ranking by classification keeps the
/// ordering total on columns that mix numbers and text, where a per-pair
/// rule would not be transitive.
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn from_value(value: &Value) -> Self {
        match numeric_value(value) {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(value.to_text()),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(x), SortKey::Number(y)) => {
                x.partial_cmp(y).unwrap_or(Ordering::Equal)
            }
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        }
    }
}

/// Compares two cell values: numerically when both sides read as numbers,
/// by raw text when neither does, and numbers-first across the divide.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    SortKey::from_value(a).compare(&SortKey::from_value(b))
}

/// Stable-sorts view indices by the named column.
///
/// The ascending order is produced first and descending is its exact
/// reverse, so sorting the same column both ways yields mirror-image
/// sequences. Equal keys keep their relative input order. Fields absent from
/// a record compare as null (the empty string).
pub fn sort_indices(
    records: &[Record],
    indices: &mut [usize],
    key: &str,
    direction: SortDirection,
) {
    let keys: Vec<SortKey> = records
        .iter()
        .map(|record| SortKey::from_value(record.get(key).unwrap_or(&Value::Null)))
        .collect();
    indices.sort_by(|&a, &b| keys[a].compare(&keys[b]));
    if direction == SortDirection::Desc {
        indices.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_by(records: &[Record], key: &str, direction: SortDirection) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        sort_indices(records, &mut indices, key, direction);
        indices
    }

    #[test]
    fn numeric_pairs_compare_numerically() {
        let records = vec![
            Record::new().with("age", 30),
            Record::new().with("age", "9"),
            Record::new().with("age", 100),
        ];
        assert_eq!(sorted_by(&records, "age", SortDirection::Asc), vec![1, 0, 2]);
    }

    #[test]
    fn strings_compare_by_code_point() {
        let records = vec![
            Record::new().with("name", "john"),
            Record::new().with("name", "Jane"),
            Record::new().with("name", "Bob"),
        ];
        // Uppercase letters order before lowercase ones.
        assert_eq!(
            sorted_by(&records, "name", SortDirection::Asc),
            vec![2, 1, 0]
        );
    }

    #[test]
    fn numbers_order_before_text() {
        let records = vec![
            Record::new().with("v", "1a"),
            Record::new().with("v", 2),
            Record::new().with("v", "10"),
        ];
        assert_eq!(sorted_by(&records, "v", SortDirection::Asc), vec![1, 2, 0]);
    }

    #[test]
    fn descending_is_the_exact_reverse_of_ascending() {
        let records = vec![
            Record::new().with("n", 2).with("tag", "a"),
            Record::new().with("n", 1).with("tag", "b"),
            Record::new().with("n", 2).with("tag", "c"),
            Record::new().with("n", 1).with("tag", "d"),
        ];
        let asc = sorted_by(&records, "n", SortDirection::Asc);
        let mut desc = sorted_by(&records, "n", SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let records = vec![
            Record::new().with("group", "x").with("id", 1),
            Record::new().with("group", "x").with("id", 2),
            Record::new().with("group", "a").with("id", 3),
            Record::new().with("group", "x").with("id", 4),
        ];
        assert_eq!(
            sorted_by(&records, "group", SortDirection::Asc),
            vec![2, 0, 1, 3]
        );
    }

    #[test]
    fn absent_fields_sort_as_empty() {
        let records = vec![
            Record::new().with("name", "John"),
            Record::new(),
            Record::new().with("name", "Bob"),
        ];
        assert_eq!(
            sorted_by(&records, "name", SortDirection::Asc),
            vec![1, 2, 0]
        );
    }
}
