//! sqlsheet - export MySQL query results to spreadsheet files.
//!
//! This library exposes the core modules for use in integration tests.

pub mod cli;
pub mod config;
pub mod connection;
pub mod db;
pub mod error;
pub mod export;
pub mod logging;
