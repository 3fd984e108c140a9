use anyhow::Result;
use clap::Parser;
use tdda::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let cli_args = Cli::parse();

    match cli_args.command {
        Commands::Init { force, skip_memory } => {
            cli::init(force, skip_memory)?;
        }
        Commands::Assess { diff, write } => {
            cli::assess(diff, write)?;
        }
        Commands::Status => {
            cli::status()?;
        }
    }

    Ok(())
}
