//! tdda — TDD agent scaffolding and change-delta assessment.
//!
//! Two independent flows share this crate: the template installer
//! ([`install`]) that scaffolds rule files and memory-bank documents into a
//! working directory, and the change reporter ([`assess`]) that resolves a
//! comparison range, categorizes changed files, and renders a markdown
//! report.

pub mod assess;
pub mod cli;
pub mod config;
pub mod git;
pub mod install;
pub mod templates;
