//! Plain-text report rendering
//!
//! Used by `--text` mode and for the summary printed after the dashboard
//! closes. Output is line-oriented so it pipes cleanly.

use crate::stats::TermReport;

/// Maximum width of a text histogram bar in characters
const MAX_BAR_WIDTH: u64 = 40;

/// Formats the report as printable lines
pub fn summary_lines(report: &TermReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Presidents: {} ({} counted)",
            report.records.len(),
            report.histogram.total()
        ),
        format!("Average years in office: {:.2}", report.average),
        String::new(),
    ];

    lines.extend(histogram_lines(report));
    lines.push(String::new());
    lines.extend(search_lines(report));

    lines
}

/// Formats the histogram section
fn histogram_lines(report: &TermReport) -> Vec<String> {
    let mut lines = vec!["Distribution of years in office:".to_string()];

    if report.histogram.is_empty() {
        lines.push("  (no tenure data)".to_string());
        return lines;
    }

    let max_count = report.histogram.max_count().max(1);
    for &(length, count) in &report.histogram.buckets {
        let bar_width = count * MAX_BAR_WIDTH / max_count;
        let bar: String = "#".repeat(bar_width as usize);
        lines.push(format!("  {length:>2} years  {bar:<40} {count}"));
    }

    lines
}

/// Formats the search results section
fn search_lines(report: &TermReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Search results for '{}' ({} matches):",
        report.query,
        report.matches.len()
    )];

    if report.matches.is_empty() {
        lines.push("  (no matches)".to_string());
        return lines;
    }

    for record in &report.matches {
        lines.push(format!("  {} ({})", record.name, record.years_in_office));
    }

    lines
}
