//! Scoring checks. Most categories are ordered tables of fixed-point
//! checks; a check adds its points and note when its condition holds, with
//! no partial credit.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::scan::ScanResult;

/// Code lines above which a file counts as huge.
pub const HUGE_FILE_LINES: usize = 800;

/// Everything a check condition may look at.
pub struct CheckContext<'a> {
    pub root: &'a Path,
    /// Names of the entries directly inside `root`.
    pub root_entries: &'a [String],
    pub scan: &'a ScanResult,
}

impl CheckContext<'_> {
    fn has_entry(&self, name: &str) -> bool {
        self.root_entries.iter().any(|e| e == name)
    }

    fn has_entry_prefix_ci(&self, prefix: &str) -> bool {
        self.root_entries
            .iter()
            .any(|e| e.to_lowercase().starts_with(prefix))
    }

    fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).exists()
    }
}

pub struct Check {
    pub points: u32,
    pub note: &'static str,
    pub condition: fn(&CheckContext) -> bool,
}

/// Directory listing of `root`; empty when it cannot be read.
pub fn root_entries(root: &Path) -> Vec<String> {
    match fs::read_dir(root) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(err) => {
            debug!(root = %root.display(), %err, "cannot list root");
            Vec::new()
        }
    }
}

/// Apply `checks` in order and return the awarded points and notes.
pub fn run_checks(checks: &[Check], ctx: &CheckContext) -> (u32, Vec<String>) {
    let mut points = 0;
    let mut notes = Vec::new();
    for check in checks {
        if (check.condition)(ctx) {
            points += check.points;
            notes.push(check.note.to_string());
        }
    }
    (points, notes)
}

pub static HYGIENE_CHECKS: &[Check] = &[
    Check {
        points: 5,
        note: "README exists",
        condition: |ctx| ctx.has_entry_prefix_ci("readme"),
    },
    Check {
        points: 3,
        note: "LICENSE exists",
        condition: |ctx| ctx.has_entry_prefix_ci("license"),
    },
    Check {
        points: 5,
        note: "CONTRIBUTING exists",
        condition: |ctx| ctx.has_entry_prefix_ci("contributing"),
    },
    Check {
        points: 5,
        note: "Issue templates detected",
        condition: |ctx| ctx.exists(".github/ISSUE_TEMPLATE"),
    },
    Check {
        points: 5,
        note: "CI config detected",
        condition: |ctx| {
            ctx.exists(".github/workflows") || ctx.exists(".circleci") || ctx.exists(".travis.yml")
        },
    },
];

/// Root entries that mark a linter or formatter besides eslint/prettier.
const LINTER_CONFIGS: &[&str] = &[
    "biome.json",
    "rustfmt.toml",
    ".rustfmt.toml",
    "clippy.toml",
    ".clippy.toml",
    "ruff.toml",
    ".flake8",
    ".rubocop.yml",
    ".golangci.yml",
    ".golangci.yaml",
    ".stylelintrc",
];

fn root_file_count(scan: &ScanResult) -> usize {
    scan.files
        .iter()
        .filter(|f| !f.path.contains('/') && !f.path.contains('\\'))
        .count()
}

/// Structure checks after the huge-file step.
pub static STRUCTURE_CHECKS: &[Check] = &[
    Check {
        points: 5,
        note: "Good directory organization",
        condition: |ctx| {
            let total = ctx.scan.files.len();
            total > 30 && (root_file_count(ctx.scan) as f64) < total as f64 * 0.2
        },
    },
    Check {
        points: 5,
        note: "Small repo structure okay",
        condition: |ctx| {
            let total = ctx.scan.files.len();
            total <= 30 && (root_file_count(ctx.scan) as f64) < total as f64 * 0.4
        },
    },
    Check {
        points: 5,
        note: "TypeScript detected",
        condition: |ctx| ctx.has_entry("tsconfig.json"),
    },
    Check {
        points: 5,
        note: "Linter/Formatter detected",
        condition: |ctx| {
            ctx.root_entries.iter().any(|e| {
                e.contains("eslint") || e.contains("prettier") || LINTER_CONFIGS.contains(&e.as_str())
            })
        },
    },
];

/// Huge-file step of the structure category: none +10, fewer than five +5.
pub fn huge_file_check(scan: &ScanResult) -> (u32, String) {
    let huge = scan
        .files
        .iter()
        .filter(|f| f.loc.code > HUGE_FILE_LINES)
        .count();
    match huge {
        0 => (10, "No huge files".to_string()),
        n if n < 5 => (5, format!("Few huge files ({n})")),
        n => (0, format!("Many huge files ({n})")),
    }
}

const TEST_RUNNER_CONFIGS: &[&str] = &[
    "vitest.config.ts",
    "vitest.config.js",
    "vitest.config.mjs",
    "jest.config.js",
    "jest.config.ts",
    "jest.config.cjs",
    "jest.config.mjs",
    "pytest.ini",
    "tox.ini",
    "karma.conf.js",
    ".mocharc.json",
    ".mocharc.yml",
    "phpunit.xml",
];

pub static TESTING_CHECKS: &[Check] = &[
    Check {
        points: 5,
        note: "Tests directory exists",
        condition: |ctx| ctx.exists("test") || ctx.exists("tests"),
    },
    Check {
        points: 5,
        note: "Test files detected",
        condition: |ctx| {
            ctx.scan
                .files
                .iter()
                .any(|f| f.path.contains(".test.") || f.path.contains(".spec."))
        },
    },
    Check {
        points: 5,
        note: "Test runner config detected",
        condition: |ctx| TEST_RUNNER_CONFIGS.iter().any(|c| ctx.has_entry(c)),
    },
    Check {
        points: 5,
        note: "Coverage reports detected",
        condition: |ctx| ctx.exists("coverage"),
    },
];

pub static DEPENDENCY_CHECKS: &[Check] = &[Check {
    points: 5,
    note: "Lockfile present",
    condition: |ctx| ctx.root_entries.iter().any(|e| e.contains("lock")),
}];

/// Declared runtime dependencies: `package.json` `dependencies`, else
/// `Cargo.toml` `[dependencies]`. `None` when neither manifest is readable.
pub fn manifest_dependency_count(root: &Path) -> Option<usize> {
    if let Ok(text) = fs::read_to_string(root.join("package.json"))
        && let Ok(pkg) = serde_json::from_str::<serde_json::Value>(&text)
    {
        return Some(
            pkg.get("dependencies")
                .and_then(|d| d.as_object())
                .map_or(0, |d| d.len()),
        );
    }
    if let Ok(text) = fs::read_to_string(root.join("Cargo.toml"))
        && let Ok(manifest) = text.parse::<toml::Table>()
    {
        return Some(
            manifest
                .get("dependencies")
                .and_then(|d| d.as_table())
                .map_or(0, |d| d.len()),
        );
    }
    None
}

/// Manifest step of the dependency category.
pub fn manifest_check(root: &Path) -> (u32, Option<&'static str>) {
    match manifest_dependency_count(root) {
        Some(n) if n < 20 => (5, Some("Low dependencies")),
        Some(n) if n < 50 => (2, Some("Moderate dependencies")),
        Some(_) => (0, None),
        None => (2, None),
    }
}

#[cfg(test)]
#[path = "checks_test.rs"]
mod tests;
