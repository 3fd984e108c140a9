//! Markdown rendering for the change-delta report.

use super::categorize::Buckets;

/// One categorization line: `- Label: none` for an empty bucket, otherwise
/// the label followed by indented path bullets.
fn format_list(label: &str, paths: &[String]) -> String {
    if paths.is_empty() {
        return format!("- {label}: none");
    }
    let bullets = paths
        .iter()
        .map(|p| format!("  - {p}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("- {label}:\n{bullets}")
}

/// Render the full report for one invocation. The structure is fixed:
/// title, stat summary, name-status listing, categorization, and a static
/// list of review focus areas.
pub fn render(range: &str, stat: &str, name_status: &str, buckets: &Buckets) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Change Delta {range}\n"));
    md.push('\n');
    md.push_str("## Summary\n");
    md.push_str("```\n");
    md.push_str(stat);
    if !stat.ends_with('\n') && !stat.is_empty() {
        md.push('\n');
    }
    md.push_str("```\n");
    md.push('\n');
    md.push_str("## Changed Files (name-status)\n");
    md.push_str("```\n");
    md.push_str(name_status);
    if !name_status.ends_with('\n') && !name_status.is_empty() {
        md.push('\n');
    }
    md.push_str("```\n");
    md.push('\n');
    md.push_str("## Categorization\n");
    for (label, paths) in buckets.sections() {
        md.push_str(&format_list(label, paths));
        md.push('\n');
    }
    md.push('\n');
    md.push_str("## Suggested Focus Areas\n");
    md.push_str("- Add/Update tests for changed public APIs and critical paths\n");
    md.push_str("- Prefer integration/contract tests for boundary changes; unit tests for pure logic\n");
    md.push_str("- If migrations/config changed, include smoke checks and rollback paths\n");

    md
}
