//! Data export: run one query and persist the result as a spreadsheet.

mod spreadsheet;

pub use spreadsheet::write_table;

use std::path::Path;

use tracing::{error, info};

use crate::connection::ConnectionManager;

/// Exports query results to spreadsheet files through a [`ConnectionManager`].
pub struct Exporter {
    manager: ConnectionManager,
}

impl Exporter {
    /// Creates a new exporter using the given connection manager.
    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    /// Returns the underlying connection manager.
    pub fn manager(&self) -> &ConnectionManager {
        &self.manager
    }

    /// Runs `query` and writes the result set to `output` as a spreadsheet.
    ///
    /// Returns `false` without raising when no session could be obtained or
    /// when any step after acquisition fails; every failure is logged. The
    /// session is released on all exit paths. An existing file at `output`
    /// is overwritten.
    pub async fn export_to_spreadsheet(&mut self, query: &str, output: &Path) -> bool {
        let outcome = self
            .manager
            .with_session(|session| async move {
                let result = run_export(&session, query, output).await;
                (session, result)
            })
            .await;

        match outcome {
            None => false,
            Some(Ok(row_count)) => {
                info!("Exported {row_count} rows to {}", output.display());
                true
            }
            Some(Err(e)) => {
                error!("Export failed: {e}");
                false
            }
        }
    }
}

async fn run_export(
    session: &crate::connection::Session,
    query: &str,
    output: &Path,
) -> crate::error::Result<usize> {
    let result = session.execute_query(query, &[]).await?;
    write_table(&result, output)?;
    Ok(result.row_count)
}
