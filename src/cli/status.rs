use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::templates::CORE_FILES;

/// Read-only view of the working directory: configuration in effect,
/// whether the rules tree is installed, and which core files exist.
pub fn status() -> Result<()> {
    let config_exists = Path::new(".tddarc.json").exists();
    let config = Config::load().unwrap_or_default();

    println!("{}", "tdda Status".cyan().bold());
    println!("{}", "=".repeat(40).dimmed());

    println!("\n{}", "Configuration:".yellow().bold());
    if config_exists {
        println!("  {} .tddarc.json found", "✓".green());
    } else {
        println!("  {} No .tddarc.json (using defaults)", "!".yellow());
    }
    println!("  Rules dir:     {}", config.rules_dir.display());
    println!("  Memory dir:    {}", config.memory_dir.display());
    println!("  Default base:  {}", config.default_base);

    println!("\n{}", "Rules:".yellow().bold());
    if config.rules_dir.exists() {
        println!("  {} installed", "✓".green());
    } else {
        println!("  {} not installed (run `tdda init`)", "!".yellow());
    }

    println!("\n{}", "Memory bank:".yellow().bold());
    let mut missing = 0;
    for name in CORE_FILES {
        if config.memory_dir.join(name).exists() {
            println!("  {} {}", "✓".green(), name);
        } else {
            println!("  {} {}", "✗".red(), name);
            missing += 1;
        }
    }
    if missing > 0 {
        println!(
            "\n  {} {} core file(s) missing (run `tdda init`)",
            "!".yellow(),
            missing
        );
    }

    println!();
    Ok(())
}
