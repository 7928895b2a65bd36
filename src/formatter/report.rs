//! Human-readable rendering of summary and validation reports

use super::cell_text;
use crate::validation::SummaryReport;
use std::fmt::Write;

/// Cut a value to `max_width` characters, ending in "..." when shortened
pub fn truncate_value(value: &str, max_width: usize) -> String {
    if value.chars().count() <= max_width {
        return value.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let mut out: String = value.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Render a summary for the terminal
pub fn format_report(report: &SummaryReport, max_value_width: usize) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "Columns ({}): {}",
        report.columns.len(),
        report.columns.join(", ")
    );
    let _ = writeln!(
        out,
        "Total rows: {} (showing {})",
        report.row_count,
        report.preview.len()
    );

    for (idx, row) in report.preview.iter().enumerate() {
        let _ = writeln!(out, "\nRow {}:", idx + 1);
        for column in &report.columns {
            let text = row.get(column).map(cell_text).unwrap_or_default();
            let _ = writeln!(out, "  {}: {}", column, truncate_value(&text, max_value_width));
        }
    }

    if report.has_warnings() {
        let _ = writeln!(out, "\nWarnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }

    out
}

/// Render schema validation errors, listing at most `limit` of them
pub fn format_schema_errors(errors: &[String], limit: usize) -> String {
    if errors.is_empty() {
        return "✓ Validation passed\n".to_string();
    }

    let mut out = format!("Validation found {} errors:\n", errors.len());
    for error in errors.iter().take(limit) {
        let _ = writeln!(out, " - {}", error);
    }
    if errors.len() > limit {
        let _ = writeln!(out, " ... and {} more", errors.len() - limit);
    }
    out
}
