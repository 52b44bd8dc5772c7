//! Maintainability score: five capped categories summed to 0–100.

pub mod checks;
pub mod grade;
pub mod quick_wins;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::complexity::repo_complexity;
use crate::scan::ScanResult;

use checks::{
    CheckContext, DEPENDENCY_CHECKS, HYGIENE_CHECKS, STRUCTURE_CHECKS, TESTING_CHECKS,
    huge_file_check, manifest_check, root_entries, run_checks,
};
pub use grade::{Grade, score_to_grade};

/// Files above this complexity count as extreme hotspots.
pub const EXTREME_COMPLEXITY: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Project Hygiene")]
    Hygiene,
    #[serde(rename = "Code Structure")]
    Structure,
    #[serde(rename = "Complexity")]
    Complexity,
    #[serde(rename = "Testing")]
    Testing,
    #[serde(rename = "Dependency Risk")]
    Dependencies,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hygiene => "Project Hygiene",
            Self::Structure => "Code Structure",
            Self::Complexity => "Complexity",
            Self::Testing => "Testing",
            Self::Dependencies => "Dependency Risk",
        }
    }

    /// Maximum points; the five maxima sum to 100.
    pub fn max(self) -> u32 {
        match self {
            Self::Hygiene => 20,
            Self::Structure => 25,
            Self::Complexity => 25,
            Self::Testing => 20,
            Self::Dependencies => 10,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
    pub max: u32,
    pub notes: Vec<String>,
}

impl CategoryScore {
    fn capped(category: Category, points: u32, notes: Vec<String>) -> Self {
        let max = category.max();
        Self {
            category,
            score: points.min(max),
            max,
            notes,
        }
    }

    pub fn is_full(&self) -> bool {
        self.score >= self.max
    }

    pub fn has_note(&self, needle: &str) -> bool {
        self.notes.iter().any(|n| n.contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintainabilityReport {
    pub score: u32,
    pub grade: Grade,
    pub breakdown: Vec<CategoryScore>,
    pub quick_wins: Vec<String>,
}

impl MaintainabilityReport {
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.breakdown.iter().find(|c| c.category == category)
    }

    pub fn category_score(&self, category: Category) -> u32 {
        self.category(category).map_or(0, |c| c.score)
    }

    /// Whether `category` carries a note containing `needle`.
    pub fn has_note(&self, category: Category, needle: &str) -> bool {
        self.category(category).is_some_and(|c| c.has_note(needle))
    }

    /// Category with the lowest score relative to its maximum. The first
    /// one wins a tie.
    pub fn weakest(&self) -> Option<&CategoryScore> {
        self.breakdown.iter().reduce(|worst, c| {
            if ratio(c) < ratio(worst) { c } else { worst }
        })
    }
}

fn ratio(c: &CategoryScore) -> f64 {
    if c.max == 0 {
        return 1.0;
    }
    c.score as f64 / c.max as f64
}

/// Score a scan of `root`. Root-level checks read the directory listing
/// and a few well-known paths under `root`.
pub fn calculate(scan: &ScanResult, root: &Path) -> MaintainabilityReport {
    let entries = root_entries(root);
    let ctx = CheckContext {
        root,
        root_entries: &entries,
        scan,
    };

    let breakdown = vec![
        hygiene(&ctx),
        structure(&ctx),
        complexity(scan),
        testing(&ctx),
        dependencies(&ctx),
    ];
    let score = breakdown.iter().map(|c| c.score).sum();

    let mut report = MaintainabilityReport {
        score,
        grade: score_to_grade(score),
        breakdown,
        quick_wins: Vec::new(),
    };
    report.quick_wins = quick_wins::suggest(&report, scan);
    report
}

fn hygiene(ctx: &CheckContext) -> CategoryScore {
    let (points, notes) = run_checks(HYGIENE_CHECKS, ctx);
    CategoryScore::capped(Category::Hygiene, points, notes)
}

fn structure(ctx: &CheckContext) -> CategoryScore {
    let (mut points, note) = huge_file_check(ctx.scan);
    let mut notes = vec![note];
    let (more, more_notes) = run_checks(STRUCTURE_CHECKS, ctx);
    points += more;
    notes.extend(more_notes);
    CategoryScore::capped(Category::Structure, points, notes)
}

/// `round(25 × (1 − repoComplexity/100))`, clamped to the category range.
pub fn complexity_points(repo_complexity: f64) -> u32 {
    let max = Category::Complexity.max() as f64;
    (max * (1.0 - repo_complexity / 100.0)).round().clamp(0.0, max) as u32
}

fn complexity(scan: &ScanResult) -> CategoryScore {
    let points = complexity_points(repo_complexity(scan.files.iter().map(|f| f.complexity)));
    let level = if points > 20 {
        "Low complexity"
    } else if points > 10 {
        "Moderate complexity"
    } else {
        "High complexity"
    };
    let extreme = scan
        .files
        .iter()
        .filter(|f| f.complexity > EXTREME_COMPLEXITY)
        .count();
    let hotspots = if extreme == 0 {
        "No extreme hotspots".to_string()
    } else {
        format!("{extreme} extreme hotspots")
    };
    CategoryScore::capped(Category::Complexity, points, vec![level.to_string(), hotspots])
}

fn testing(ctx: &CheckContext) -> CategoryScore {
    let (points, notes) = run_checks(TESTING_CHECKS, ctx);
    CategoryScore::capped(Category::Testing, points, notes)
}

fn dependencies(ctx: &CheckContext) -> CategoryScore {
    let (mut points, mut notes) = run_checks(DEPENDENCY_CHECKS, ctx);
    let (manifest_points, note) = manifest_check(ctx.root);
    points += manifest_points;
    notes.extend(note.map(str::to_string));
    CategoryScore::capped(Category::Dependencies, points, notes)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
