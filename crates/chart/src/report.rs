// crates/chart/src/report.rs

use std::cmp::Reverse;

use crate::bar::generate_bar;
use crate::config::ChartConfig;
use crate::loader::ProjectRecord;

const TITLE: &str = "# Project Activity - Visualized";

/// Order records by count, largest first. Equal counts keep their input order.
pub fn sort_records(records: &[ProjectRecord]) -> Vec<&ProjectRecord> {
    let mut sorted: Vec<_> = records.iter().collect();
    sorted.sort_by_key(|record| Reverse(record.count));
    sorted
}

/// Assemble the Markdown chart for `records`.
///
/// The result has a title, a caption stating the scale and maximum width, one
/// aligned line per record inside a `text` code block and a footer naming the
/// input file. There is no trailing newline.
pub fn render_report(records: &[ProjectRecord], cfg: &ChartConfig) -> String {
    let sorted = sort_records(records);
    let max_name_len = sorted
        .iter()
        .map(|record| record.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(sorted.len() + 7);
    lines.push(TITLE.to_string());
    lines.push(String::new());
    lines.push(format!(
        "Each `{}` represents approximately **{}** activities. Maximum bar length: **{}** characters.",
        cfg.palette.full(),
        cfg.scale,
        cfg.max_bar_width
    ));
    lines.push(String::new());
    lines.push("```text".to_string());

    for record in sorted {
        let count = i64::try_from(record.count).unwrap_or(i64::MAX);
        let bar = generate_bar(count, cfg.scale, cfg.max_bar_width, &cfg.palette);
        tracing::trace!(
            project = %record.name,
            count = record.count,
            width = bar.chars().count(),
            "rendered bar"
        );
        lines.push(format!(
            "{:<width$} : {} ({})",
            record.name,
            bar,
            record.count,
            width = max_name_len
        ));
    }

    lines.push("```".to_string());
    lines.push(format!("\n*(Generated from `{}`)*", cfg.input_path.display()));

    lines.join("\n")
}
