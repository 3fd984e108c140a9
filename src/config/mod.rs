use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool configuration, loaded from an optional `.tddarc.json` in the
/// working directory. Destinations were process-wide globals in earlier
/// iterations of this tool; they are explicit here so every operation can
/// be pointed at a temp directory in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where rule files are installed
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,

    /// Where the memory bank lives
    #[serde(default = "default_memory_dir")]
    pub memory_dir: PathBuf,

    /// Base ref to diff against when none is given
    #[serde(default = "default_base")]
    pub default_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            memory_dir: default_memory_dir(),
            default_base: default_base(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(".tddarc.json");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Re-root the configured destinations under `base`. Relative paths in
    /// the config are interpreted against the working directory; tests use
    /// this to aim them at a temp dir instead.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        if self.rules_dir.is_relative() {
            self.rules_dir = base.join(&self.rules_dir);
        }
        if self.memory_dir.is_relative() {
            self.memory_dir = base.join(&self.memory_dir);
        }
        self
    }
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from(".cursor/rules")
}

fn default_memory_dir() -> PathBuf {
    PathBuf::from("memory-bank")
}

fn default_base() -> String {
    "origin/main".to_string()
}
