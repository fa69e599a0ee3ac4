//! Integration tests for sqlsheet.

pub mod config_test;
pub mod export_test;
