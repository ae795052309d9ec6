use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::ProbeConfig;
use crate::errors::ProbeError;
use crate::models::ScanRecord;
use crate::reporting::formatter::{format_report_date, format_top_rules, page_label};
use crate::utils::sanitize_url;

const DASHBOARD_HEAD: &str = r#"<!doctype html>
<html>
<head>
    <meta charset="utf-8">
    <title>Accessibility & Analytics Mini-Probe</title>
    <link href="https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap" rel="stylesheet">
    <style>
        body {
            font-family: 'Roboto', sans-serif;
            padding: 20px;
            background: linear-gradient(to right, #f0f4f8, #d9e2ec);
            color: #333;
        }
        h1, h2, h3 { color: #1a73e8; }
        .site-button {
            margin: 5px;
            padding: 10px 15px;
            cursor: pointer;
            background-color: #1a73e8;
            color: white;
            border: none;
            border-radius: 5px;
            transition: background 0.3s;
        }
        .site-button:hover {
            background-color: #1558b0;
        }
        .site-section { display:none; margin-top:20px; }
        table {
            border-collapse: collapse;
            width: 100%;
            margin-top: 20px;
            background-color: white;
            box-shadow: 0 2px 6px rgba(0,0,0,0.1);
            border-radius: 8px;
            overflow: hidden;
        }
        th, td {
            border-bottom: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }
        tr:nth-child(even) { background-color: #f9f9f9; }
        tr:hover { background-color: #f1f5f9; }
        img { max-width: 800px; margin-top: 10px; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.2); }
    </style>
</head>
<body>
<h1>Accessibility & Analytics Mini-Probe</h1>
"#;

const TOGGLE_SCRIPT: &str = r#"<script>
    function showSite(siteId){
        const sections = document.querySelectorAll('.site-section');
        sections.forEach(s => s.style.display = 'none');
        document.getElementById(siteId).style.display = 'block';
    }
</script>
</body>
</html>
"#;

/// Assembles the whole batch into one self-contained dashboard: per-page
/// toggle buttons, an overall summary table, and one initially hidden
/// detail section per page embedding its chart.
///
/// The chart reference is derived from the same sanitization convention the
/// renderer uses, not from the renderer's return value; a page skipped for
/// empty rule data simply shows no image.
pub fn assemble_dashboard(
    records: &[ScanRecord],
    config: &ProbeConfig,
) -> Result<PathBuf, ProbeError> {
    let out_path = config.dashboard_path.clone();
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut html = String::from(DASHBOARD_HEAD);

    html.push_str("<div id=\"site-buttons\">\n");
    for record in records {
        let site_id = sanitize_url(&record.page_url);
        html.push_str(&format!(
            "<button class=\"site-button\" onclick=\"showSite('{}')\">{}</button>\n",
            site_id, record.page_url
        ));
    }
    html.push_str("</div>\n");

    html.push_str(
        "<h2>Overall Summary</h2>\n<table>\n<thead>\n<tr>\n\
         <th>Page URL</th>\n<th>Timestamp</th>\n<th>Total Violations</th>\n<th>Top 3 Rule Counts</th>\n\
         </tr>\n</thead>\n<tbody>\n",
    );
    for record in records {
        html.push_str(&format!(
            "<tr>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>\n",
            record.page_url,
            record.timestamp,
            record.total_violations,
            format_top_rules(record, 3)
        ));
    }
    html.push_str("</tbody>\n</table>\n");

    for record in records {
        let site_id = sanitize_url(&record.page_url);
        let chart_file = format!("charts/violations_{}.png", site_id);
        html.push_str(&format!(
            "<div id=\"{site_id}\" class=\"site-section\">\n\
             <h2>Accessibility Report: <a href=\"{url}\" target=\"_blank\">{label}</a></h2>\n\
             <p><strong>Report Date:</strong> {date} | <strong>Total Violations:</strong> {total}</p>\n\
             <h3>Violations by Rule</h3>\n\
             <img src=\"{chart}\" alt=\"Violations chart for {url}\">\n\
             </div>\n",
            site_id = site_id,
            url = record.page_url,
            label = page_label(&record.page_url),
            date = format_report_date(&record.timestamp),
            total = record.total_violations,
            chart = chart_file,
        ));
    }

    html.push_str(TOGGLE_SCRIPT);

    fs::write(&out_path, html)?;
    println!("Wrote {}", out_path.display());
    info!(records = records.len(), "Dashboard assembled");
    Ok(out_path)
}
