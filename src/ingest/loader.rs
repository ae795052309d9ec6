use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::ProbeError;
use crate::models::ScanRecord;

/// Scanner output is either one scan object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScanBatch {
    Many(Vec<ScanRecord>),
    One(Box<ScanRecord>),
}

/// Reads the scanner's JSON output, normalizing a single object into a
/// one-element batch so every downstream consumer sees a uniform shape.
pub fn load_scans(path: &Path) -> Result<Vec<ScanRecord>, ProbeError> {
    if !path.exists() {
        return Err(ProbeError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let batch: ScanBatch = serde_json::from_str(&content)
        .map_err(|e| ProbeError::MalformedInput(format!("{}: {}", path.display(), e)))?;

    let records = match batch {
        ScanBatch::Many(records) => records,
        ScanBatch::One(record) => vec![*record],
    };
    debug!(count = records.len(), "Loaded scan records");
    Ok(records)
}
