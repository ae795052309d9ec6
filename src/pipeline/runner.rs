use tracing::info;

use crate::chart;
use crate::config::ProbeConfig;
use crate::db::Database;
use crate::errors::ProbeError;
use crate::ingest;
use crate::reporting;

/// What a completed run produced.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub records: usize,
    pub charts: usize,
}

/// One full batch: load every record, then append each to the log and
/// render its chart in input order, then assemble the dashboard once for
/// the whole batch. Single pass, no retries; the first fatal error aborts
/// the run.
pub fn run(config: &ProbeConfig) -> Result<RunSummary, ProbeError> {
    let records = ingest::load_scans(&config.input_path)?;
    info!(count = records.len(), "Loaded scan records");

    let db = Database::new(&config.db_path)?;
    let mut charts = 0;
    for record in &records {
        db.append_scan(record)?;
        if chart::render_rule_chart(record, &config.charts_dir)?.is_some() {
            charts += 1;
        }
    }

    reporting::assemble_dashboard(&records, config)?;

    Ok(RunSummary {
        records: records.len(),
        charts,
    })
}
