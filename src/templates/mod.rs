//! Bundled template content, embedded at compile time.
//!
//! Two template sets ship with the binary: the rules tree installed under
//! the rules destination, and the memory-bank core documents. Both are
//! immutable tables of (relative path, content) pairs; nothing here touches
//! the filesystem.

/// One bundled template file.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the destination root, using `/` separators.
    pub rel_path: &'static str,
    pub content: &'static str,
}

/// Rule files installed under the rules destination (default `.cursor/rules`).
pub const RULES: &[TemplateFile] = &[
    TemplateFile {
        rel_path: "tdd-workflow.mdc",
        content: include_str!("../../templates/rules/tdd-workflow.mdc"),
    },
    TemplateFile {
        rel_path: "plan-mode.mdc",
        content: include_str!("../../templates/rules/plan-mode.mdc"),
    },
    TemplateFile {
        rel_path: "act-mode.mdc",
        content: include_str!("../../templates/rules/act-mode.mdc"),
    },
];

/// The 12 core documents that must exist in the memory bank after `init`.
pub const CORE_FILES: [&str; 12] = [
    "projectbrief.md",
    "productContext.md",
    "activeContext.md",
    "systemPatterns.md",
    "techContext.md",
    "progress.md",
    "testPlan.md",
    "testInventory.md",
    "coverageGaps.md",
    "riskMatrix.md",
    "assessment.md",
    "specSources.md",
];

/// Memory-bank templates, in `CORE_FILES` order.
pub const MEMORY_BANK: &[TemplateFile] = &[
    TemplateFile {
        rel_path: "projectbrief.md",
        content: include_str!("../../templates/memory-bank/projectbrief.md"),
    },
    TemplateFile {
        rel_path: "productContext.md",
        content: include_str!("../../templates/memory-bank/productContext.md"),
    },
    TemplateFile {
        rel_path: "activeContext.md",
        content: include_str!("../../templates/memory-bank/activeContext.md"),
    },
    TemplateFile {
        rel_path: "systemPatterns.md",
        content: include_str!("../../templates/memory-bank/systemPatterns.md"),
    },
    TemplateFile {
        rel_path: "techContext.md",
        content: include_str!("../../templates/memory-bank/techContext.md"),
    },
    TemplateFile {
        rel_path: "progress.md",
        content: include_str!("../../templates/memory-bank/progress.md"),
    },
    TemplateFile {
        rel_path: "testPlan.md",
        content: include_str!("../../templates/memory-bank/testPlan.md"),
    },
    TemplateFile {
        rel_path: "testInventory.md",
        content: include_str!("../../templates/memory-bank/testInventory.md"),
    },
    TemplateFile {
        rel_path: "coverageGaps.md",
        content: include_str!("../../templates/memory-bank/coverageGaps.md"),
    },
    TemplateFile {
        rel_path: "riskMatrix.md",
        content: include_str!("../../templates/memory-bank/riskMatrix.md"),
    },
    TemplateFile {
        rel_path: "assessment.md",
        content: include_str!("../../templates/memory-bank/assessment.md"),
    },
    TemplateFile {
        rel_path: "specSources.md",
        content: include_str!("../../templates/memory-bank/specSources.md"),
    },
];
