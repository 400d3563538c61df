//! Integration tests for the pipeline module.

use std::path::PathBuf;

use tabview_cli::pipeline::{LoadedTable, ViewRequest, build_view, ensure_exportable, load_table};
use tabview_ingest::config_from_str;

const DATA: &str = r#"[
    {"name": "John", "age": 30},
    {"name": "Jane", "age": 25},
    {"name": "Bob", "age": 35}
]"#;

const CONFIG: &str = r#"{
    "title": "People",
    "columns": [
        {"key": "name", "title": "Name"},
        {"key": "age", "title": "Age", "type": "numeric", "sortable": false}
    ],
    "pageSize": 2
}"#;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn setup(dir: &tempfile::TempDir, config: Option<&str>) -> LoadedTable {
    let data = write_file(dir, "data.json", DATA);
    let config_path = config.map(|raw| write_file(dir, "table.json", raw));
    load_table(&data, config_path.as_deref()).unwrap()
}

#[test]
fn test_load_table_reads_records_and_config() {
    let dir = tempfile::tempdir().unwrap();
    let table = setup(&dir, Some(CONFIG));

    assert_eq!(table.records.len(), 3);
    assert_eq!(table.config.title.as_deref(), Some("People"));
    assert_eq!(table.config.page_size, 2);
    assert_eq!(table.config.columns.len(), 2);
}

#[test]
fn test_load_table_derives_a_schema_without_config() {
    let dir = tempfile::tempdir().unwrap();
    let table = setup(&dir, None);

    let keys: Vec<&str> = table.config.columns.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["age", "name"]);
    assert_eq!(table.config.columns[0].title, "Age");
}

#[test]
fn test_build_view_applies_sort_and_page() {
    let dir = tempfile::tempdir().unwrap();
    let table = setup(&dir, None);

    let request = ViewRequest {
        sort: Some("name".to_string()),
        page: Some(2),
        page_size: Some(2),
        ..ViewRequest::default()
    };
    let view = build_view(&table.config, table.records, &request).unwrap();

    let names: Vec<String> = view.page_records().iter().map(|r| r.text("name")).collect();
    assert_eq!(names, vec!["John"]);
    assert_eq!(view.state().current_page, 2);
}

#[test]
fn test_query_filters_before_paging() {
    let dir = tempfile::tempdir().unwrap();
    let table = setup(&dir, None);

    let request = ViewRequest {
        query: Some("j".to_string()),
        page_size: Some(1),
        ..ViewRequest::default()
    };
    let view = build_view(&table.config, table.records, &request).unwrap();

    assert_eq!(view.filtered_len(), 2);
    assert_eq!(view.total_pages(), 2);
    assert_eq!(view.page_records().len(), 1);
}

#[test]
fn test_unknown_sort_column_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let table = setup(&dir, None);

    let request = ViewRequest {
        sort: Some("salary".to_string()),
        ..ViewRequest::default()
    };
    let error = build_view(&table.config, table.records, &request).unwrap_err();

    assert!(error.to_string().contains("unknown sort column: salary"));
}

#[test]
fn test_non_sortable_column_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let table = setup(&dir, Some(CONFIG));

    let request = ViewRequest {
        sort: Some("age".to_string()),
        ..ViewRequest::default()
    };
    let error = build_view(&table.config, table.records, &request).unwrap_err();

    assert!(error.to_string().contains("not sortable"));
}

#[test]
fn test_no_pagination_flag_shows_everything() {
    let dir = tempfile::tempdir().unwrap();
    let table = setup(&dir, Some(CONFIG));

    let request = ViewRequest {
        no_pagination: true,
        ..ViewRequest::default()
    };
    let view = build_view(&table.config, table.records, &request).unwrap();

    assert_eq!(view.page_records().len(), 3);
    assert_eq!(view.total_pages(), 1);
}

#[test]
fn test_export_gate_respects_the_config() {
    let closed = config_from_str(r#"{"columns": [], "exportable": false}"#).unwrap();
    assert!(ensure_exportable(&closed).is_err());

    let open = config_from_str(r#"{"columns": []}"#).unwrap();
    assert!(ensure_exportable(&open).is_ok());
}

#[test]
fn test_missing_data_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let error = load_table(&missing, None).unwrap_err();

    assert!(format!("{error:#}").contains("read data file"));
}
