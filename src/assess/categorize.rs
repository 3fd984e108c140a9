//! Changed-file categorization.
//!
//! Six independent predicates over the raw path string, applied in a fixed
//! order. A path may land in several buckets (`package.json` is both
//! Config/CI and an external spec) and that overlap is intentional; nothing
//! is deduplicated or normalized.

use regex::Regex;
use std::sync::OnceLock;

type Predicate = fn(&str) -> bool;

/// Category rules in report order.
const RULES: [(&str, Predicate); 6] = [
    ("Source", is_source),
    ("Tests", is_tests),
    ("Contracts/Schemas", is_contracts),
    ("Config/CI", is_config),
    ("Migrations", is_migrations),
    ("External Specs", is_specs),
];

fn is_source(path: &str) -> bool {
    path.starts_with("src/") || path.starts_with("app/") || path.starts_with("lib/")
}

fn is_tests(path: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|/)tests?/|\.(spec|test)\.").unwrap())
        .is_match(path)
}

fn is_contracts(path: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|/)(openapi|proto|contracts)/").unwrap())
        .is_match(path)
}

fn is_config(path: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(package\.json|pyproject\.toml|pom\.xml|dockerfile|docker-compose\.ya?ml|\.github/workflows/)",
        )
        .unwrap()
    })
    .is_match(path)
}

fn is_migrations(path: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(^|/)migrations?/").unwrap())
        .is_match(path)
}

fn is_specs(path: &str) -> bool {
    static SEGMENT: OnceLock<Regex> = OnceLock::new();
    static EXT: OnceLock<Regex> = OnceLock::new();
    let segment = SEGMENT.get_or_init(|| Regex::new(r"(^|/)test-specs/").unwrap());
    let ext = EXT.get_or_init(|| Regex::new(r"(?i)\.(feature|csv|xml|json)$").unwrap());
    segment.is_match(path) || ext.is_match(path)
}

/// Changed paths grouped by category, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    sections: Vec<(&'static str, Vec<String>)>,
}

impl Buckets {
    /// `(label, paths)` pairs in the fixed category order.
    pub fn sections(&self) -> &[(&'static str, Vec<String>)] {
        &self.sections
    }

    /// Paths in the named bucket; empty for unknown labels.
    pub fn get(&self, label: &str) -> &[String] {
        self.sections
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, paths)| paths.as_slice())
            .unwrap_or(&[])
    }

    /// The external-specs bucket, used to drive the spec index.
    pub fn specs(&self) -> &[String] {
        self.get("External Specs")
    }
}

/// Partition `paths` into buckets. Each bucket preserves input order; the
/// same path appears in every bucket whose predicate matches it.
pub fn categorize(paths: &[String]) -> Buckets {
    let sections = RULES
        .iter()
        .map(|(label, predicate)| {
            let matched = paths
                .iter()
                .filter(|p| predicate(p.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            (*label, matched)
        })
        .collect();

    Buckets { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mixed_changeset_lands_in_expected_buckets() {
        let buckets = categorize(&paths(&[
            "src/a.js",
            "test/a.test.js",
            "package.json",
            "test-specs/x.feature",
        ]));

        assert_eq!(buckets.get("Source"), ["src/a.js"]);
        assert_eq!(buckets.get("Tests"), ["test/a.test.js"]);
        assert_eq!(buckets.get("Config/CI"), ["package.json"]);
        assert_eq!(
            buckets.specs(),
            ["package.json", "test-specs/x.feature"]
        );
        assert!(buckets.get("Contracts/Schemas").is_empty());
        assert!(buckets.get("Migrations").is_empty());
    }

    #[test]
    fn overlap_is_not_deduplicated() {
        let buckets = categorize(&paths(&["package.json"]));
        assert_eq!(buckets.get("Config/CI"), ["package.json"]);
        assert_eq!(buckets.specs(), ["package.json"]);
    }

    #[test]
    fn buckets_preserve_input_order() {
        let buckets = categorize(&paths(&["src/z.rs", "src/a.rs", "src/m.rs"]));
        assert_eq!(buckets.get("Source"), ["src/z.rs", "src/a.rs", "src/m.rs"]);
    }

    #[test]
    fn source_prefix_must_be_leading() {
        let buckets = categorize(&paths(&["packages/src/a.rs", "src/a.rs"]));
        assert_eq!(buckets.get("Source"), ["src/a.rs"]);
    }

    #[test]
    fn tests_match_directory_segment_and_infix() {
        let buckets = categorize(&paths(&[
            "tests/integration.rs",
            "pkg/test/helper.py",
            "component.spec.ts",
            "api.test.js",
            "contest/entry.md",
        ]));
        assert_eq!(
            buckets.get("Tests"),
            [
                "tests/integration.rs",
                "pkg/test/helper.py",
                "component.spec.ts",
                "api.test.js"
            ]
        );
    }

    #[test]
    fn contracts_match_known_segments() {
        let buckets = categorize(&paths(&[
            "openapi/service.yaml",
            "idl/proto/user.proto",
            "contracts/payment.json",
            "subcontracts/x.txt",
        ]));
        assert_eq!(
            buckets.get("Contracts/Schemas"),
            [
                "openapi/service.yaml",
                "idl/proto/user.proto",
                "contracts/payment.json"
            ]
        );
    }

    #[test]
    fn config_matches_case_insensitively() {
        let buckets = categorize(&paths(&[
            "Dockerfile",
            "deploy/docker-compose.yml",
            "docker-compose.yaml",
            "backend/pom.xml",
            ".github/workflows/ci.yml",
            "PYPROJECT.TOML",
        ]));
        assert_eq!(buckets.get("Config/CI").len(), 6);
    }

    #[test]
    fn migrations_match_case_insensitively() {
        let buckets = categorize(&paths(&[
            "db/migrations/001_init.sql",
            "Migration/V2.sql",
            "premigrations/x.sql",
        ]));
        assert_eq!(
            buckets.get("Migrations"),
            ["db/migrations/001_init.sql", "Migration/V2.sql"]
        );
    }

    #[test]
    fn spec_extensions_match_case_insensitively() {
        let buckets = categorize(&paths(&["data/FIXTURE.CSV", "report.Xml", "notes.txt"]));
        assert_eq!(buckets.specs(), ["data/FIXTURE.CSV", "report.Xml"]);
    }

    #[test]
    fn empty_input_yields_six_empty_buckets() {
        let buckets = categorize(&[]);
        assert_eq!(buckets.sections().len(), 6);
        for (_, paths) in buckets.sections() {
            assert!(paths.is_empty());
        }
    }

    #[test]
    fn section_order_is_fixed() {
        let labels: Vec<&str> = categorize(&[])
            .sections()
            .iter()
            .map(|(l, _)| *l)
            .collect();
        assert_eq!(
            labels,
            [
                "Source",
                "Tests",
                "Contracts/Schemas",
                "Config/CI",
                "Migrations",
                "External Specs"
            ]
        );
    }

    #[test]
    fn unknown_label_returns_empty() {
        let buckets = categorize(&paths(&["src/a.rs"]));
        assert!(buckets.get("Nope").is_empty());
    }
}
