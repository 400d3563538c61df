//! Case-insensitive substring filtering over raw field values.
//!
//! Matching works on raw stringified values, never on formatted display
//! text: a currency cell showing `¥50,000.00` is matched by `50000`, not by
//! `50,000`. Custom renderers are never invoked here.

use tabview_model::{Column, Record};

/// True when any of the record's visible fields (those named by the schema)
/// contains the already-lowercased query.
pub fn matches_query(record: &Record, columns: &[Column], query_lower: &str) -> bool {
    columns.iter().any(|column| {
        record
            .get(&column.key)
            .is_some_and(|value| value.to_text().to_lowercase().contains(query_lower))
    })
}

/// Indices of the records retained by the query, in input order. The empty
/// query keeps everything.
pub fn filter_indices(records: &[Record], columns: &[Column], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }
    let query_lower = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_query(record, columns, &query_lower))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Vec<Column> {
        vec![Column::new("name", "Name"), Column::new("age", "Age")]
    }

    fn team() -> Vec<Record> {
        vec![
            Record::new().with("name", "John").with("age", 30),
            Record::new().with("name", "Jane").with("age", 25),
            Record::new().with("name", "Bob").with("age", 35),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let records = team();
        assert_eq!(filter_indices(&records, &schema(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let records = team();
        assert_eq!(filter_indices(&records, &schema(), "JOHN"), vec![0]);
        assert_eq!(filter_indices(&records, &schema(), "j"), vec![0, 1]);
        assert_eq!(filter_indices(&records, &schema(), "zzz"), Vec::<usize>::new());
    }

    #[test]
    fn numeric_fields_match_on_raw_text() {
        let records = team();
        assert_eq!(filter_indices(&records, &schema(), "35"), vec![2]);
        assert_eq!(filter_indices(&records, &schema(), "3"), vec![0, 2]);
    }

    #[test]
    fn fields_outside_the_schema_are_invisible() {
        let records = vec![
            Record::new().with("name", "John").with("secret", "xyzzy"),
        ];
        let columns = vec![Column::new("name", "Name")];
        assert!(filter_indices(&records, &columns, "xyzzy").is_empty());
    }
}
