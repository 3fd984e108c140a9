use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::install;

pub fn init(force: bool, skip_memory: bool) -> Result<()> {
    println!(
        "\n{}",
        "tdda — TDD agent rules and memory-bank scaffolding"
            .cyan()
            .bold()
    );
    println!();

    let config = Config::load().unwrap_or_default();
    install::install(&config, force, skip_memory)?;

    println!();
    println!("{}", "Setup complete!".green().bold());
    println!("  Rules:    {}", config.rules_dir.display());
    if !skip_memory {
        println!("  Memory:   {}", config.memory_dir.display());
        println!(
            "\n  {} Start by filling {}/projectbrief.md and testPlan.md",
            "next:".cyan(),
            config.memory_dir.display()
        );
    }

    Ok(())
}
