mod assess;
mod init;
mod status;

pub use assess::assess;
pub use init::init;
pub use status::status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tdda",
    about = "Install TDD agent rules and memory-bank templates, and assess change deltas",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the rules tree and memory-bank templates
    Init {
        /// Overwrite existing files
        #[arg(short = 'f', long)]
        force: bool,

        /// Do not create/update memory-bank templates
        #[arg(long)]
        skip_memory: bool,
    },

    /// Summarize the diff against a base revision, optionally into the memory bank
    Assess {
        /// Git range to assess as base..head (default origin/main..HEAD)
        #[arg(long, value_name = "base..head")]
        diff: Option<String>,

        /// Append the report to memory-bank/assessment.md
        #[arg(long)]
        write: bool,
    },

    /// Show configuration and which memory-bank files exist
    Status,
}

/// Split a `base..head` range into its two refs. Either side may be empty
/// (`..HEAD`, `origin/main..`), in which case the caller's default applies.
pub fn parse_range(range: &str) -> (Option<String>, Option<String>) {
    match range.split_once("..") {
        Some((base, head)) => {
            let base = (!base.is_empty()).then(|| base.to_string());
            let head = (!head.is_empty()).then(|| head.to_string());
            (base, head)
        }
        None => ((!range.is_empty()).then(|| range.to_string()), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_range_full() {
        assert_eq!(
            parse_range("origin/main..HEAD"),
            (
                Some("origin/main".to_string()),
                Some("HEAD".to_string())
            )
        );
    }

    #[test]
    fn parse_range_base_only() {
        assert_eq!(
            parse_range("origin/main.."),
            (Some("origin/main".to_string()), None)
        );
        assert_eq!(
            parse_range("origin/main"),
            (Some("origin/main".to_string()), None)
        );
    }

    #[test]
    fn parse_range_head_only() {
        assert_eq!(parse_range("..v1.2.0"), (None, Some("v1.2.0".to_string())));
    }

    #[test]
    fn parse_range_empty() {
        assert_eq!(parse_range(""), (None, None));
        assert_eq!(parse_range(".."), (None, None));
    }

    #[test]
    fn init_flags_parse() {
        let cli = Cli::try_parse_from(["tdda", "init", "--force", "--skip-memory"]).unwrap();
        match cli.command {
            Commands::Init { force, skip_memory } => {
                assert!(force);
                assert!(skip_memory);
            }
            _ => panic!("expected init"),
        }
    }

    #[test]
    fn assess_flags_parse() {
        let cli = Cli::try_parse_from(["tdda", "assess", "--diff", "main..HEAD", "--write"]).unwrap();
        match cli.command {
            Commands::Assess { diff, write } => {
                assert_eq!(diff.as_deref(), Some("main..HEAD"));
                assert!(write);
            }
            _ => panic!("expected assess"),
        }
    }
}
