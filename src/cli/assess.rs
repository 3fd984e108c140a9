use anyhow::Result;

use crate::assess::{self, AssessOptions};
use crate::config::Config;
use crate::git::GitCli;

use super::parse_range;

pub fn assess(diff: Option<String>, write: bool) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let git = GitCli::current_dir()?;

    let (base, head) = match diff.as_deref() {
        Some(range) => parse_range(range),
        None => (None, None),
    };

    assess::assess(&config, &git, &AssessOptions { base, head, write })
}
