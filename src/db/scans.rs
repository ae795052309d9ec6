use rusqlite::params;

use super::Database;
use crate::errors::ProbeError;
use crate::models::ScanRecord;

impl Database {
    /// Appends one scan as a new row. Never an upsert: re-running the
    /// pipeline on the same input adds rows rather than replacing them.
    pub fn append_scan(&self, record: &ScanRecord) -> Result<(), ProbeError> {
        let rules_json = serde_json::to_string(&record.violations_by_rule)?;
        self.conn
            .execute(
                "INSERT INTO scans (page_url, timestamp, total_violations, violations_by_rule) VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.page_url,
                    record.timestamp,
                    record.total_violations as i64,
                    rules_json
                ],
            )
            .map_err(|e| ProbeError::Database(format!("Failed to append scan: {}", e)))?;
        Ok(())
    }

    /// Row count of the log. The pipeline never reads the log back; this
    /// exists for tests and ad-hoc inspection.
    pub fn scan_count(&self) -> Result<u64, ProbeError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM scans", [], |row| row.get::<_, i64>(0))
            .map(|n| n as u64)
            .map_err(|e| ProbeError::Database(format!("Count failed: {}", e)))
    }
}
