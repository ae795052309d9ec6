use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{} not found. Run the scanner first.", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
