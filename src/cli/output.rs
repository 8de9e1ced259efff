//! Output formatting for CLI

use crate::MergeSummary;

/// Format a merge summary as human-readable text
#[must_use]
pub fn format_text(summary: &MergeSummary) -> String {
    let mut lines = Vec::new();

    if summary.dry_run {
        lines.push(format!("Dry run against {}", summary.report_dir));
    } else {
        lines.push(format!("Report: {}", summary.report_dir));
    }

    let tally = &summary.tally;
    lines.push(format!(
        "Children: {} ({} passed, {} failed, {} ignored)",
        summary.children, tally.passed, tally.failed, tally.ignored
    ));

    if summary.injected_targets.is_empty() {
        lines.push("Injected: none".to_string());
    } else {
        lines.push(format!("Injected: {}", summary.injected_targets.join(", ")));
    }

    lines.push(format!("Test cases: {}", summary.test_cases));

    if summary.dry_run {
        lines.push(format!("Planned: {} operations", summary.planned_operations));
    } else {
        lines.push(format!(
            "Files: {} written, {} copied ({} bytes)",
            summary.files_written, summary.files_copied, summary.bytes_written
        ));
    }

    lines.join("\n")
}

/// Format a merge summary as JSON
#[must_use]
pub fn format_json(summary: &MergeSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}
