//! sqlsheet - export MySQL query results to spreadsheet files.

use sqlsheet::cli::Cli;
use sqlsheet::connection::ConnectionManager;
use sqlsheet::export::Exporter;
use sqlsheet::logging;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::init_stderr_logging();

    let cli = Cli::parse_args();
    info!("Loading config from: {}", cli.config.display());

    let manager = ConnectionManager::new(&cli.config);
    let mut exporter = Exporter::new(manager);

    // Failures are logged by the exporter; the exit code is the only
    // other status channel.
    if !exporter.export_to_spreadsheet(&cli.query, &cli.output).await {
        std::process::exit(1);
    }
}
