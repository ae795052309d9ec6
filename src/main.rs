use a11y_probe::cli;
use a11y_probe::errors::ProbeError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if let Err(e) = cli::run::handle_run(cli) {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            ProbeError::NotFound(_) => 2,
            ProbeError::MalformedInput(_) => 3,
            ProbeError::Database(_) => 4,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}
