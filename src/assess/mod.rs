//! Change-delta assessment: resolve a comparison range, categorize the
//! changed files, and render a markdown report that is either printed or
//! appended to the memory bank.

pub mod categorize;
pub mod render;

pub use categorize::{categorize, Buckets};
pub use render::render;

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::git::{resolve_base, DiffView, RevisionService};

const REPORT_FILE: &str = "assessment.md";
const SPEC_INDEX_FILE: &str = "specSources.md";
const SPEC_INDEX_HEADER: &str = "# Spec Sources\n\n## Index\n";

#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    /// Base ref to diff from; falls back to the configured default.
    pub base: Option<String>,
    /// Head ref to diff to; defaults to HEAD.
    pub head: Option<String>,
    /// Append the report to the memory bank instead of printing it.
    pub write: bool,
}

/// Run a full assessment. Diff failures after base resolution are fatal;
/// everything before that degrades through the fallback chain.
pub fn assess(config: &Config, service: &dyn RevisionService, options: &AssessOptions) -> Result<()> {
    let head = options.head.as_deref().unwrap_or("HEAD");
    let requested = options.base.as_deref().unwrap_or(&config.default_base);

    let base = resolve_base(service, requested, head);
    let range = format!("{base}..{head}");

    let name_status = service.diff(DiffView::NameStatus, &range)?;
    let stat = service.diff(DiffView::Stat, &range)?;
    let name_only = service.diff(DiffView::NameOnly, &range)?;

    let files: Vec<String> = name_only
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let buckets = categorize(&files);
    let report = render(&range, &stat, &name_status, &buckets);

    if options.write {
        persist(&config.memory_dir, &range, &report, buckets.specs())?;
    } else {
        println!("{report}");
    }

    Ok(())
}

/// Append `report` to the memory bank's report document, separated from any
/// prior content, and index spec paths when there are any. Both documents
/// only ever grow.
pub fn persist(memory_dir: &Path, range: &str, report: &str, specs: &[String]) -> Result<()> {
    std::fs::create_dir_all(memory_dir)
        .with_context(|| format!("Failed to create {}", memory_dir.display()))?;

    let report_path = memory_dir.join(REPORT_FILE);
    let has_content = std::fs::metadata(&report_path)
        .map(|m| m.len() > 0)
        .unwrap_or(false);
    let separator = if has_content { "\n\n---\n" } else { "" };

    append(&report_path, &format!("{separator}{report}"))?;
    println!(
        "{} {} updated with Change Delta {}",
        "✓".green(),
        REPORT_FILE,
        range
    );

    if specs.is_empty() {
        return Ok(());
    }

    let index_path = memory_dir.join(SPEC_INDEX_FILE);
    let existing = std::fs::read_to_string(&index_path).unwrap_or_default();
    let header = if existing.is_empty() {
        SPEC_INDEX_HEADER
    } else {
        "\n"
    };

    let date = chrono::Utc::now().format("%Y-%m-%d");
    let mut block = String::new();
    block.push_str(header);
    block.push_str(&format!("### Added/Changed (from diff, {date})\n"));
    for path in specs {
        block.push_str(&format!("- {path}\n"));
    }

    append(&index_path, &block)?;
    println!(
        "{} {} updated with {} spec file(s)",
        "✓".green(),
        SPEC_INDEX_FILE,
        specs.len()
    );

    Ok(())
}

fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("Failed to append to {}", path.display()))?;
    Ok(())
}
