//! Revision-comparison backend.
//!
//! The reporter only needs three capabilities from version control: a
//! best-effort fetch, a ref-existence check, and diff text in three views.
//! `RevisionService` captures exactly that seam; `GitCli` implements it by
//! shelling out to `git`, and tests substitute an in-memory mock.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Well-known hash of git's empty tree; diffing against it shows the whole
/// tree as added, which is what we want for a repository with no history.
pub const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// The three diff listings the report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffView {
    NameStatus,
    Stat,
    NameOnly,
}

impl DiffView {
    fn flag(self) -> &'static str {
        match self {
            DiffView::NameStatus => "--name-status",
            DiffView::Stat => "--stat",
            DiffView::NameOnly => "--name-only",
        }
    }
}

pub trait RevisionService {
    /// Update remote refs. Callers treat failure as non-fatal.
    fn fetch(&self) -> Result<()>;

    /// Whether `gitref` resolves to a revision. Any failure counts as no.
    fn verify(&self, gitref: &str) -> bool;

    /// Diff text for `range` in the given view.
    fn diff(&self, view: DiffView, range: &str) -> Result<String>;
}

/// `git` subprocess backend rooted at a working directory.
pub struct GitCli {
    repo_dir: PathBuf,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    pub fn current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::new(cwd))
    }

    fn git(&self, args: &[&str]) -> Result<std::process::Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .with_context(|| format!("Failed to run git {}", args.join(" ")))
    }
}

impl RevisionService for GitCli {
    fn fetch(&self) -> Result<()> {
        let output = self.git(&["fetch"])?;
        if !output.status.success() {
            anyhow::bail!(
                "git fetch failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(())
    }

    fn verify(&self, gitref: &str) -> bool {
        self.git(&["rev-parse", "--verify", gitref])
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn diff(&self, view: DiffView, range: &str) -> Result<String> {
        let output = self.git(&["diff", view.flag(), range])?;
        if !output.status.success() {
            anyhow::bail!(
                "git diff {} {} failed: {}",
                view.flag(),
                range,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolve the base ref for a comparison range.
///
/// Order is fixed: the requested base if it verifies, else the revision
/// just before `head`, else the empty tree. A fetch is attempted first so
/// remote refs like `origin/main` have a chance to exist locally, but a
/// fetch failure (offline, no remote) never blocks resolution.
pub fn resolve_base(service: &dyn RevisionService, requested: &str, head: &str) -> String {
    // offline or no remote is fine; resolve against local refs
    let _ = service.fetch();

    if service.verify(requested) {
        return requested.to_string();
    }

    let parent = format!("{head}~1");
    if service.verify(&parent) {
        return parent;
    }

    EMPTY_TREE.to_string()
}
