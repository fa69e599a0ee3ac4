//! Mock database clients for testing.
//!
//! Provide in-memory implementations so the connection manager and
//! exporter can be exercised without a MySQL server.

use super::{ColumnInfo, DatabaseClient, QueryResult, Value};
use crate::error::{Result, SqlsheetError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A mock database client that returns a predefined result.
pub struct MockDatabaseClient {
    result: QueryResult,
    close_count: Arc<AtomicUsize>,
}

impl MockDatabaseClient {
    /// Creates a new mock client returning a single-row, single-column result.
    pub fn new() -> Self {
        let columns = vec![ColumnInfo::new("result", "VARCHAR")];
        let rows = vec![vec![Value::String("mock".to_string())]];
        Self::with_result(QueryResult::with_data(columns, rows))
    }

    /// Creates a mock client that returns the given result for every query.
    pub fn with_result(result: QueryResult) -> Self {
        Self {
            result,
            close_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a handle to the close counter, for asserting release behavior.
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.close_count)
    }
}

impl Default for MockDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_query(&self, _sql: &str, _params: &[Value]) -> Result<QueryResult> {
        Ok(self
            .result
            .clone()
            .with_execution_time(Duration::from_millis(1)))
    }

    async fn close(&self) -> Result<()> {
        self.close_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A mock database client whose queries always fail.
pub struct FailingDatabaseClient {
    close_count: Arc<AtomicUsize>,
}

impl FailingDatabaseClient {
    /// Creates a new failing client.
    pub fn new() -> Self {
        Self {
            close_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a handle to the close counter, for asserting release behavior.
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.close_count)
    }
}

impl Default for FailingDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_query(&self, _sql: &str, _params: &[Value]) -> Result<QueryResult> {
        Err(SqlsheetError::query("simulated query failure"))
    }

    async fn close(&self) -> Result<()> {
        self.close_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
