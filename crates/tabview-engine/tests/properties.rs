// Property-based coverage of the filter/sort/page algebra.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::cmp::Ordering;

use proptest::prelude::*;

use tabview_engine::{
    TableView, compare_values, filter_indices, sort_indices, total_pages,
};
use tabview_model::{Column, Record, SortDirection, Value};

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn schema() -> Vec<Column> {
    vec![Column::new("k", "Key"), Column::new("note", "Note")]
}

/// Arbitrary cell value: mostly numbers and short strings, sometimes null,
/// with a small alphabet so collisions (equal sort keys) actually happen.
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => (0i64..20).prop_map(Value::from),
        2 => "[a-c]{0,2}".prop_map(Value::from),
        1 => Just(Value::Null),
        1 => any::<bool>().prop_map(Value::from),
    ]
}

fn arb_records(max: usize) -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec((arb_value(), "[a-c]{0,3}"), 0..max).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(key, note)| Record::new().with("k", key).with("note", note))
            .collect()
    })
}

fn key_at<'a>(records: &'a [Record], index: usize) -> &'a Value {
    records[index].get("k").unwrap_or(&Value::Null)
}

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn empty_query_is_identity(records in arb_records(30)) {
        let expected: Vec<usize> = (0..records.len()).collect();
        prop_assert_eq!(filter_indices(&records, &schema(), ""), expected);
    }

    #[test]
    fn filter_output_is_an_ordered_subset(records in arb_records(30), query in "[a-c0-9]{1,2}") {
        let kept = filter_indices(&records, &schema(), &query);
        // Strictly increasing indices into the input.
        for pair in kept.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for &index in &kept {
            prop_assert!(index < records.len());
        }
    }

    #[test]
    fn descending_mirrors_ascending(records in arb_records(30)) {
        let mut asc: Vec<usize> = (0..records.len()).collect();
        sort_indices(&records, &mut asc, "k", SortDirection::Asc);

        let mut desc: Vec<usize> = (0..records.len()).collect();
        sort_indices(&records, &mut desc, "k", SortDirection::Desc);

        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn sorting_is_stable(records in arb_records(30)) {
        let mut order: Vec<usize> = (0..records.len()).collect();
        sort_indices(&records, &mut order, "k", SortDirection::Asc);
        for (pos_a, &a) in order.iter().enumerate() {
            for &b in &order[pos_a + 1..] {
                let cmp = compare_values(key_at(&records, a), key_at(&records, b));
                prop_assert_ne!(cmp, Ordering::Greater);
                if cmp == Ordering::Equal {
                    prop_assert!(a < b, "equal keys out of input order");
                }
            }
        }
    }

    #[test]
    fn page_count_is_a_ceiling(count in 0usize..500, page_size in 1usize..40) {
        let total = total_pages(count, page_size);
        prop_assert!(total >= 1);
        prop_assert!((total - 1) * page_size < count.max(1));
        prop_assert!(count <= total * page_size);
    }

    #[test]
    fn change_page_stays_in_bounds(
        records in arb_records(40),
        page_size in 1usize..7,
        requested in 0usize..80,
    ) {
        let mut view = TableView::new(schema(), records).with_page_size(page_size);
        view.change_page(requested);
        let page = view.state().current_page;
        prop_assert!(page >= 1);
        prop_assert!(page <= view.total_pages());
        prop_assert!(view.page_records().len() <= page_size);
    }

    #[test]
    fn replacing_data_always_resets_the_page(
        records in arb_records(40),
        replacement in arb_records(40),
        page_size in 1usize..7,
        requested in 0usize..80,
    ) {
        let mut view = TableView::new(schema(), records).with_page_size(page_size);
        view.change_page(requested);
        view.replace_data(replacement);
        prop_assert_eq!(view.state().current_page, 1);
    }
}
