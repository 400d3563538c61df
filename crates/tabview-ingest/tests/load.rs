use std::path::PathBuf;

use tempfile::TempDir;

use tabview_ingest::{load_config, records_from_path};
use tabview_model::ColumnType;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_records_and_config_from_disk() {
    let dir = TempDir::new().unwrap();
    let data_path = write_file(
        &dir,
        "data.json",
        r#"[
            {"name": "John", "age": 30, "salary": 50000},
            {"name": "Jane", "age": 25, "salary": 61000}
        ]"#,
    );
    let config_path = write_file(
        &dir,
        "config.json",
        r#"{
            "title": "Team",
            "columns": [
                {"prop": "name", "label": "Name"},
                {"prop": "age", "label": "Age", "type": "numeric"},
                {"prop": "salary", "label": "Salary", "type": "currency"}
            ],
            "pageSize": 5
        }"#,
    );

    let records = records_from_path(&data_path).expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text("name"), "John");

    let config = load_config(&config_path).expect("config");
    assert_eq!(config.title.as_deref(), Some("Team"));
    assert_eq!(config.columns.len(), 3);
    assert_eq!(config.columns[2].column_type, Some(ColumnType::Currency));
    assert_eq!(config.page_size, 5);
}

#[test]
fn malformed_record_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.json", r#"{"rows": "not an array"}"#);
    let records = records_from_path(&path).expect("records");
    assert!(records.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let path = PathBuf::from("/nonexistent/tabview/data.json");
    assert!(records_from_path(&path).is_err());
}
