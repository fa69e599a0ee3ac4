//! Error types for sqlsheet.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for sqlsheet operations.
#[derive(Error, Debug)]
pub enum SqlsheetError {
    /// Configuration errors (missing config section, unreadable file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connection errors (host unreachable, auth failed, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution errors (syntax errors, unknown tables, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Export errors (spreadsheet serialization, file write failures, etc.)
    #[error("Export error: {0}")]
    Export(String),
}

impl SqlsheetError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates an export error with the given message.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::Export(_) => "Export Error",
        }
    }
}

/// Result type alias using SqlsheetError.
pub type Result<T> = std::result::Result<T, SqlsheetError>;
