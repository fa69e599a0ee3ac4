//! Command-line argument parsing for sqlsheet.

use clap::Parser;
use std::path::PathBuf;

/// Export MySQL query results to spreadsheet files.
#[derive(Parser, Debug)]
#[command(name = "sqlsheet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQL query to execute
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output spreadsheet path (overwritten if it exists)
    #[arg(short = 'o', long, value_name = "PATH", default_value = "output.xlsx")]
    pub output: PathBuf,

    /// Config file path
    #[arg(long, value_name = "PATH", default_value = "config/db_config.toml")]
    pub config: PathBuf,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
