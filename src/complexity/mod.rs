//! Complexity proxy: a cheap, language-agnostic structural score per file.
//!
//! This is not cyclomatic complexity. Each non-blank line contributes its
//! branch and definition keywords, and the deepest indentation in the file
//! is tracked:
//!
//!   score = branches × 1.5 + definitions × 0.5 + max_nesting × 5 + (loc / 100) × 2
//!
//! clamped to 0–100. Nesting dominates; length only contributes mildly.

use std::path::Path;

use serde::Serialize;

use crate::util::split_lines;

const BRANCH_KEYWORDS: &[&str] = &[
    "if", "else", "switch", "case", "for", "while", "catch", "try", "finally", "do",
];

// "=>" never survives tokenization, so it never counts.
const FUNC_KEYWORDS: &[&str] = &[
    "function", "return", "=>", "def", "class", "struct", "interface",
];

/// Path fragments marking test files, which are never scored.
const TEST_MARKERS: &[&str] = &[".test.", ".spec.", "__tests__"];

/// Number of top-scoring files averaged into the repository complexity.
pub const REPO_TOP_FILES: usize = 20;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityDetails {
    pub branch_count: usize,
    pub func_count: usize,
    pub max_nesting: usize,
    pub loc_code: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexityScore {
    pub score: f64,
    pub details: ComplexityDetails,
}

pub fn is_test_path(path: &str) -> bool {
    TEST_MARKERS.iter().any(|m| path.contains(m))
}

/// Score a file on disk. Test files and unreadable files score zero.
#[cfg(test)]
pub fn analyze_file(path: &Path) -> ComplexityScore {
    if is_test_path(&path.to_string_lossy()) {
        return ComplexityScore::default();
    }
    match crate::util::read_source(path) {
        Some(content) => analyze_content(&content),
        None => ComplexityScore::default(),
    }
}

/// Score already-loaded content for `path`, applying the test-file rule.
pub fn analyze_path_content(path: &Path, content: &str) -> ComplexityScore {
    if is_test_path(&path.to_string_lossy()) {
        return ComplexityScore::default();
    }
    analyze_content(content)
}

pub fn analyze_content(content: &str) -> ComplexityScore {
    let mut details = ComplexityDetails::default();

    for line in split_lines(content) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        details.loc_code += 1;
        details.max_nesting = details.max_nesting.max(line_nesting(line));

        for token in tokens(trimmed) {
            if BRANCH_KEYWORDS.contains(&token) {
                details.branch_count += 1;
            }
            if FUNC_KEYWORDS.contains(&token) {
                details.func_count += 1;
            }
        }
    }

    ComplexityScore {
        score: raw_score(&details),
        details,
    }
}

/// Estimated nesting depth: leading whitespace characters / 2.
fn line_nesting(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count() / 2
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
}

fn raw_score(d: &ComplexityDetails) -> f64 {
    let raw = d.branch_count as f64 * 1.5
        + d.func_count as f64 * 0.5
        + d.max_nesting as f64 * 5.0
        + d.loc_code as f64 / 100.0 * 2.0;
    raw.clamp(0.0, 100.0)
}

/// Repository complexity: mean of the `REPO_TOP_FILES` highest file scores,
/// 0 for an empty set.
pub fn repo_complexity(scores: impl IntoIterator<Item = f64>) -> f64 {
    let mut scores: Vec<f64> = scores.into_iter().collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.sort_by(|a, b| b.total_cmp(a));
    scores.truncate(REPO_TOP_FILES);
    scores.iter().sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
