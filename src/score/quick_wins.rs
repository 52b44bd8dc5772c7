use super::checks::HUGE_FILE_LINES;
use super::{Category, MaintainabilityReport};
use crate::scan::ScanResult;

pub const MAX_QUICK_WINS: usize = 5;

/// Hotspots above this score earn a refactoring suggestion.
const HOTSPOT_THRESHOLD: f64 = 50.0;

/// Up to five suggestions in fixed priority: hygiene gaps, structure gaps,
/// testing gaps, then the top complexity hotspot. A category only yields
/// suggestions when it scored below its maximum.
pub fn suggest(report: &MaintainabilityReport, scan: &ScanResult) -> Vec<String> {
    let mut wins = Vec::new();
    let lacking = |category| report.category(category).filter(|c| !c.is_full());

    if let Some(hygiene) = lacking(Category::Hygiene) {
        if !hygiene.has_note("README") {
            wins.push("Add a README.md file.".to_string());
        }
        if !hygiene.has_note("LICENSE") {
            wins.push("Add a LICENSE file.".to_string());
        }
        if !hygiene.has_note("CI") {
            wins.push("Add CI configuration (GitHub Actions, etc).".to_string());
        }
    }

    if let Some(structure) = lacking(Category::Structure) {
        if scan.files.iter().any(|f| f.loc.code > HUGE_FILE_LINES) {
            wins.push("Refactor/Split files larger than 800 LOC.".to_string());
        }
        if !structure.has_note("Linter") {
            wins.push(
                "Add linter/formatter configuration (eslint, prettier, rustfmt, etc).".to_string(),
            );
        }
    }

    if let Some(testing) = lacking(Category::Testing)
        && !testing.has_note("Tests directory")
    {
        wins.push("Create a test directory and add tests.".to_string());
    }

    if let Some(top) = scan.hotspots.by_complexity.first()
        && top.score > HOTSPOT_THRESHOLD
    {
        wins.push(format!(
            "Refactor highly complex file: {} (Score: {})",
            top.path,
            top.score.round()
        ));
    }

    wins.truncate(MAX_QUICK_WINS);
    wins
}

#[cfg(test)]
#[path = "quick_wins_test.rs"]
mod tests;
