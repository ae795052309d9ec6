use std::fs;
use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::errors::ProbeError;
use crate::models::ScanRecord;
use crate::utils::sanitize_url;

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 400;

/// Renders the ranked violations-by-rule bar chart for one scan.
///
/// Returns the bare filename for the dashboard to embed, or `None` when the
/// record carries no rule data; nothing is written in that case. Re-running
/// with the same input overwrites the previous image.
pub fn render_rule_chart(
    record: &ScanRecord,
    charts_dir: &Path,
) -> Result<Option<String>, ProbeError> {
    let ranked: Vec<(String, u64)> = record
        .ranked_rules()
        .into_iter()
        .map(|(rule, count)| (rule.to_string(), count))
        .collect();
    if ranked.is_empty() {
        println!("No rule data to plot for {}.", record.page_url);
        return Ok(None);
    }

    fs::create_dir_all(charts_dir)?;
    let filename = format!("violations_{}.png", sanitize_url(&record.page_url));
    let out_path = charts_dir.join(&filename);

    let y_max = ranked.iter().map(|(_, count)| *count).max().unwrap_or(1);
    {
        let root = BitMapBackend::new(&out_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Violations by Rule: {}", record.page_url),
                ("sans-serif", 20),
            )
            .margin(12)
            .x_label_area_size(110)
            .y_label_area_size(48)
            .build_cartesian_2d(
                (0u32..ranked.len() as u32).into_segmented(),
                0u64..y_max + 1,
            )
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(ranked.len())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) => ranked
                    .get(*i as usize)
                    .map(|(rule, _)| rule.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .x_label_style(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
            .y_desc("Count")
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(ranked.iter().enumerate().map(|(i, (_, count))| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i as u32), 0u64),
                        (SegmentValue::Exact(i as u32 + 1), *count),
                    ],
                    BLUE.filled(),
                )
            }))
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    println!("Wrote {}", out_path.display());
    debug!(rules = ranked.len(), "Rendered chart");
    Ok(Some(filename))
}

fn chart_err<E: std::fmt::Display>(e: E) -> ProbeError {
    ProbeError::Chart(e.to_string())
}
