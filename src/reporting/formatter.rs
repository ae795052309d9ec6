use chrono::{DateTime, NaiveDateTime};
use url::Url;

use crate::models::ScanRecord;

const DISPLAY_FORMAT: &str = "%B %-d, %Y, %-I:%M %p";

/// Human label for a page link: the hostname with any leading `www.`
/// stripped and the first letter capitalized. Falls back to the raw URL
/// when no hostname can be parsed out of it.
pub fn page_label(page_url: &str) -> String {
    let host = Url::parse(page_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string));
    match host {
        Some(host) => capitalize(host.strip_prefix("www.").unwrap_or(&host)),
        None => page_url.to_string(),
    }
}

/// `January 2, 2024, 10:00 AM` style report date. A timestamp that does
/// not parse is shown verbatim rather than failing the render.
pub fn format_report_date(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    // Scanners sometimes emit naive timestamps without an offset
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    timestamp.to_string()
}

/// Top-`n` rules rendered as `rule:count` pairs joined by `, `.
pub fn format_top_rules(record: &ScanRecord, n: usize) -> String {
    record
        .top_rules(n)
        .iter()
        .map(|(rule, count)| format!("{}:{}", rule, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
