//! Export integration tests.
//!
//! Exercise the full connect -> query -> serialize -> disconnect flow
//! against the mock database clients.

use std::sync::atomic::Ordering;

use calamine::{open_workbook, Data, Reader, Xlsx};
use pretty_assertions::assert_eq;
use sqlsheet::connection::ConnectionManager;
use sqlsheet::db::{ColumnInfo, FailingDatabaseClient, MockDatabaseClient, QueryResult, Value};
use sqlsheet::export::Exporter;

/// A 2-row, 3-column result matching the shape the exporter must persist.
fn sample_result() -> QueryResult {
    let columns = vec![
        ColumnInfo::new("id", "INT"),
        ColumnInfo::new("name", "VARCHAR"),
        ColumnInfo::new("score", "DOUBLE"),
    ];
    let rows = vec![
        vec![
            Value::Int(1),
            Value::String("Alice".to_string()),
            Value::Float(91.5),
        ],
        vec![
            Value::Int(2),
            Value::String("Bob".to_string()),
            Value::Float(84.0),
        ],
    ];
    QueryResult::with_data(columns, rows)
}

#[tokio::test]
async fn test_export_writes_spreadsheet_and_returns_true() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.xlsx");

    let client = MockDatabaseClient::with_result(sample_result());
    let manager = ConnectionManager::with_client("config/db_config.toml", Box::new(client));
    let mut exporter = Exporter::new(manager);

    let ok = exporter
        .export_to_spreadsheet("SELECT id, name, score FROM students", &output)
        .await;

    assert!(ok);

    let mut workbook: Xlsx<_> = open_workbook(&output).unwrap();
    let sheet = workbook.worksheet_range_at(0).unwrap().unwrap();

    // Header plus the two data rows; three columns, no index column.
    assert_eq!(sheet.height(), 3);
    assert_eq!(sheet.width(), 3);

    // Header row matches the column names in query-result order.
    assert_eq!(sheet.get_value((0, 0)), Some(&Data::String("id".to_string())));
    assert_eq!(
        sheet.get_value((0, 1)),
        Some(&Data::String("name".to_string()))
    );
    assert_eq!(
        sheet.get_value((0, 2)),
        Some(&Data::String("score".to_string()))
    );

    // Data rows match the records; the first column carries the id
    // values, not a row index.
    assert_eq!(sheet.get_value((1, 0)), Some(&Data::Float(1.0)));
    assert_eq!(
        sheet.get_value((1, 1)),
        Some(&Data::String("Alice".to_string()))
    );
    assert_eq!(sheet.get_value((1, 2)), Some(&Data::Float(91.5)));

    assert_eq!(sheet.get_value((2, 0)), Some(&Data::Float(2.0)));
    assert_eq!(
        sheet.get_value((2, 1)),
        Some(&Data::String("Bob".to_string()))
    );
    assert_eq!(sheet.get_value((2, 2)), Some(&Data::Float(84.0)));
}

#[tokio::test]
async fn test_export_disconnects_exactly_once_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.xlsx");

    let client = MockDatabaseClient::with_result(sample_result());
    let closes = client.close_counter();
    let manager = ConnectionManager::with_client("config/db_config.toml", Box::new(client));
    let mut exporter = Exporter::new(manager);

    assert!(exporter.export_to_spreadsheet("SELECT 1", &output).await);

    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(!exporter.manager().is_connected());
}

#[tokio::test]
async fn test_export_disconnects_exactly_once_on_query_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.xlsx");

    let client = FailingDatabaseClient::new();
    let closes = client.close_counter();
    let manager = ConnectionManager::with_client("config/db_config.toml", Box::new(client));
    let mut exporter = Exporter::new(manager);

    let ok = exporter.export_to_spreadsheet("SELECT 1", &output).await;

    assert!(!ok);
    assert!(!output.exists());
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(!exporter.manager().is_connected());
}

#[tokio::test]
async fn test_export_disconnects_exactly_once_on_write_failure() {
    let client = MockDatabaseClient::with_result(sample_result());
    let closes = client.close_counter();
    let manager = ConnectionManager::with_client("config/db_config.toml", Box::new(client));
    let mut exporter = Exporter::new(manager);

    let ok = exporter
        .export_to_spreadsheet("SELECT 1", std::path::Path::new("/nonexistent/dir/out.xlsx"))
        .await;

    assert!(!ok);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_export_returns_false_when_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.xlsx");

    // Bogus config path: connect fails, so no session is ever obtained.
    let manager = ConnectionManager::new("/nonexistent/db_config.toml");
    let mut exporter = Exporter::new(manager);

    let ok = exporter.export_to_spreadsheet("SELECT 1", &output).await;

    assert!(!ok);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.xlsx");
    std::fs::write(&output, b"stale contents").unwrap();

    let client = MockDatabaseClient::with_result(sample_result());
    let manager = ConnectionManager::with_client("config/db_config.toml", Box::new(client));
    let mut exporter = Exporter::new(manager);

    assert!(exporter.export_to_spreadsheet("SELECT 1", &output).await);

    let contents = std::fs::read(&output).unwrap();
    // xlsx files are zip archives, which start with "PK"
    assert_eq!(&contents[..2], b"PK");
}

#[tokio::test]
async fn test_export_empty_result_writes_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("empty.xlsx");

    let columns = vec![ColumnInfo::new("id", "INT")];
    let client = MockDatabaseClient::with_result(QueryResult::with_data(columns, Vec::new()));
    let manager = ConnectionManager::with_client("config/db_config.toml", Box::new(client));
    let mut exporter = Exporter::new(manager);

    assert!(exporter.export_to_spreadsheet("SELECT id FROM t", &output).await);
    assert!(output.exists());
}
