use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "a11y-probe", version, about = "Accessibility scan analyzer and dashboard generator")]
pub struct Cli {
    /// Scan results JSON produced by the scanner
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// SQLite scan log
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Directory receiving the dashboard and chart images
    #[arg(short, long)]
    pub reports_dir: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the end-of-run summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
