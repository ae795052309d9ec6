pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS scans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    page_url TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    total_violations INTEGER NOT NULL DEFAULT 0,
    violations_by_rule TEXT NOT NULL DEFAULT '{}'
);
";
