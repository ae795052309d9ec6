use std::path::{Path, PathBuf};

/// Filesystem layout for one analysis run.
///
/// Every component takes this explicitly instead of reading ambient path
/// constants, so tests can point a whole run at a temp directory.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Scanner output consumed by the loader.
    pub input_path: PathBuf,
    /// Append-only SQLite scan log.
    pub db_path: PathBuf,
    /// Directory receiving one PNG per charted page.
    pub charts_dir: PathBuf,
    /// The assembled static dashboard.
    pub dashboard_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/latest_scan.json"),
            db_path: PathBuf::from("data/scans.db"),
            charts_dir: PathBuf::from("reports/charts"),
            dashboard_path: PathBuf::from("reports/summary.html"),
        }
    }
}

impl ProbeConfig {
    /// Default layout rooted at an arbitrary directory.
    pub fn rooted(root: &Path) -> Self {
        Self {
            input_path: root.join("data/latest_scan.json"),
            db_path: root.join("data/scans.db"),
            charts_dir: root.join("reports/charts"),
            dashboard_path: root.join("reports/summary.html"),
        }
    }

    /// Repoints chart and dashboard output under `dir`. The dashboard
    /// references charts relative to its own location, so the two must
    /// stay siblings.
    pub fn set_reports_dir(&mut self, dir: &Path) {
        self.charts_dir = dir.join("charts");
        self.dashboard_path = dir.join("summary.html");
    }
}
