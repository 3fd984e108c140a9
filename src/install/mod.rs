//! Template installer: scaffolds the rules tree and the memory-bank core
//! documents into the configured destinations.
//!
//! Existence at the destination is the only gate: content is never compared,
//! and nothing is ever deleted. `--force` flips every gate to overwrite.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::templates::{TemplateFile, MEMORY_BANK, RULES};

/// Copy embedded templates into `dest`, writing only the entries for which
/// `filter` returns true on the destination path. The skip-if-exists policy
/// lives in the caller's predicate, not here.
pub fn copy_templates<F>(entries: &[TemplateFile], dest: &Path, filter: F) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    for entry in entries {
        let target = dest.join(entry.rel_path);
        if !filter(&target) {
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, entry.content)
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }
    Ok(())
}

/// Install the rules tree. Returns true when the destination was created
/// fresh (or force-overwritten), false when an existing destination was
/// merged into non-destructively.
pub fn install_rules(config: &Config, force: bool) -> Result<bool> {
    if let Some(parent) = config.rules_dir.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    if config.rules_dir.exists() && !force {
        // Non-destructive merge: only files absent at the destination
        copy_templates(RULES, &config.rules_dir, |dest| !dest.exists())?;
        return Ok(false);
    }

    copy_templates(RULES, &config.rules_dir, |_| true)?;
    Ok(true)
}

/// Ensure the 12 memory-bank core files exist. Each file is gated
/// independently, so one invocation can skip some files and write others.
pub fn install_memory(config: &Config, force: bool) -> Result<()> {
    fs::create_dir_all(&config.memory_dir)
        .with_context(|| format!("Failed to create {}", config.memory_dir.display()))?;

    copy_templates(MEMORY_BANK, &config.memory_dir, |dest| {
        !dest.exists() || force
    })
}

/// Full installation: rules tree, then (unless skipped) the memory bank.
/// Aborts on the first filesystem error; whatever was already written
/// stands, nothing is rolled back.
pub fn install(config: &Config, force: bool, skip_memory: bool) -> Result<()> {
    println!(
        "{}",
        format!("Installing rules at {}...", config.rules_dir.display())
            .green()
            .bold()
    );
    install_rules(config, force)?;
    println!(
        "{} Rules installed at {}",
        "✓".green(),
        config.rules_dir.display()
    );

    if skip_memory {
        println!("{} Skipping memory-bank initialization by request", "!".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Creating memory bank at {}...", config.memory_dir.display())
            .green()
            .bold()
    );
    install_memory(config, force)?;
    println!(
        "{} Memory bank ready at {}",
        "✓".green(),
        config.memory_dir.display()
    );

    Ok(())
}
