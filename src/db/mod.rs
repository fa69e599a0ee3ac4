//! Database abstraction layer for sqlsheet.
//!
//! Provides a trait-based interface for query execution, allowing the
//! MySQL client to be swapped for mock implementations in tests.

mod mock;
mod mysql;
mod types;

pub use mock::{FailingDatabaseClient, MockDatabaseClient};
pub use mysql::MySqlClient;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Opens a database client for the given configuration.
///
/// This is the central factory function for database connections.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn DatabaseClient>> {
    let client = MySqlClient::connect(config).await?;
    Ok(Box::new(client))
}

/// Trait defining the interface for database clients.
///
/// All database operations are async and return Results with SqlsheetError.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a SQL query with bound positional parameters and returns the results.
    async fn execute_query(&self, sql: &str, params: &[Value]) -> Result<QueryResult>;

    /// Closes the database connection.
    async fn close(&self) -> Result<()>;
}
