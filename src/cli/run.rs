use console::style;
use tracing::info;

use crate::cli::Cli;
use crate::config::ProbeConfig;
use crate::errors::ProbeError;
use crate::pipeline;

pub fn handle_run(cli: Cli) -> Result<(), ProbeError> {
    let mut config = ProbeConfig::default();
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(database) = cli.database {
        config.db_path = database;
    }
    if let Some(dir) = cli.reports_dir {
        config.set_reports_dir(&dir);
    }

    info!(input = %config.input_path.display(), "Starting analysis run");
    let summary = pipeline::run(&config)?;

    if !cli.quiet {
        println!(
            "{} {} record(s) processed, {} chart(s) written, dashboard at {}",
            style("Done:").green().bold(),
            summary.records,
            summary.charts,
            config.dashboard_path.display(),
        );
    }
    Ok(())
}
