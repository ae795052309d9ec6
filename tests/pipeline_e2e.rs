use std::fs;

use a11y_probe::config::ProbeConfig;
use a11y_probe::db::Database;
use a11y_probe::errors::ProbeError;
use a11y_probe::pipeline;
use tempfile::TempDir;

fn write_input(config: &ProbeConfig, content: &str) {
    fs::create_dir_all(config.input_path.parent().unwrap()).unwrap();
    fs::write(&config.input_path, content).unwrap();
}

#[test]
fn test_single_record_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config = ProbeConfig::rooted(dir.path());
    write_input(
        &config,
        r#"{
            "page_url": "https://site.org",
            "timestamp": "2024-01-02T10:00:00Z",
            "total_violations": 3,
            "violations_by_rule": {"color-contrast": 2, "alt-text": 1}
        }"#,
    );

    let summary = pipeline::run(&config).unwrap();
    assert_eq!(summary.records, 1);
    assert_eq!(summary.charts, 1);

    // one store row
    let db = Database::new(&config.db_path).unwrap();
    assert_eq!(db.scan_count().unwrap(), 1);

    // one chart file, named by the sanitization convention
    assert!(config.charts_dir.join("violations_site_org.png").exists());

    // dashboard content
    let html = fs::read_to_string(&config.dashboard_path).unwrap();
    assert!(html.contains(">https://site.org</button>"));
    assert!(html.contains("<td>3</td>"));
    assert!(html.contains("color-contrast:2, alt-text:1"));
    assert!(html.contains(">Site.org</a>"));
}

#[test]
fn test_batch_of_records_in_order() {
    let dir = TempDir::new().unwrap();
    let config = ProbeConfig::rooted(dir.path());
    write_input(
        &config,
        r#"[
            {"page_url": "https://a.org", "timestamp": "2024-01-02T10:00:00Z",
             "violations_by_rule": {"x": 4}},
            {"page_url": "https://b.org", "timestamp": "2024-01-03T10:00:00Z",
             "violations_by_rule": {}},
            {"page_url": "https://c.org", "timestamp": "2024-01-04T10:00:00Z",
             "violations_by_rule": {"y": 1}}
        ]"#,
    );

    let summary = pipeline::run(&config).unwrap();
    assert_eq!(summary.records, 3);
    // b.org has no rule data, so only two charts
    assert_eq!(summary.charts, 2);

    let db = Database::new(&config.db_path).unwrap();
    assert_eq!(db.scan_count().unwrap(), 3);

    assert!(config.charts_dir.join("violations_a_org.png").exists());
    assert!(!config.charts_dir.join("violations_b_org.png").exists());
    assert!(config.charts_dir.join("violations_c_org.png").exists());

    let html = fs::read_to_string(&config.dashboard_path).unwrap();
    assert_eq!(html.matches("class=\"site-button\"").count(), 3);
    assert_eq!(html.matches("class=\"site-section\"").count(), 3);
}

#[test]
fn test_missing_input_fails_before_side_effects() {
    let dir = TempDir::new().unwrap();
    let config = ProbeConfig::rooted(dir.path());

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, ProbeError::NotFound(_)));

    // no log, no charts, no dashboard
    assert!(!config.db_path.exists());
    assert!(!config.charts_dir.exists());
    assert!(!config.dashboard_path.exists());
}

#[test]
fn test_malformed_input_aborts_run() {
    let dir = TempDir::new().unwrap();
    let config = ProbeConfig::rooted(dir.path());
    write_input(&config, "{not json");

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, ProbeError::MalformedInput(_)));
    assert!(!config.dashboard_path.exists());
}

#[test]
fn test_rerun_appends_rows_and_overwrites_artifacts() {
    let dir = TempDir::new().unwrap();
    let config = ProbeConfig::rooted(dir.path());
    write_input(
        &config,
        r#"{"page_url": "https://site.org", "timestamp": "2024-01-02T10:00:00Z",
            "total_violations": 3, "violations_by_rule": {"color-contrast": 2}}"#,
    );

    pipeline::run(&config).unwrap();
    pipeline::run(&config).unwrap();

    // append-only log: two rows, not one
    let db = Database::new(&config.db_path).unwrap();
    assert_eq!(db.scan_count().unwrap(), 2);

    // artifacts overwritten, not duplicated
    let charts: Vec<_> = fs::read_dir(&config.charts_dir).unwrap().collect();
    assert_eq!(charts.len(), 1);
}

#[test]
fn test_unparseable_timestamp_survives_the_run() {
    let dir = TempDir::new().unwrap();
    let config = ProbeConfig::rooted(dir.path());
    write_input(
        &config,
        r#"{"page_url": "https://site.org", "timestamp": "not-a-date",
            "violations_by_rule": {"x": 1}}"#,
    );

    pipeline::run(&config).unwrap();

    let html = fs::read_to_string(&config.dashboard_path).unwrap();
    assert!(html.contains("not-a-date"));
}
