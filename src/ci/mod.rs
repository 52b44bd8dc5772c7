//! CI quality gate over a previously written report.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::report::JSON_REPORT;
use crate::score::grade::rank_of;

pub const DEFAULT_MIN_GRADE: &str = "C";

/// Gate thresholds. A minimum score, when given, takes precedence over the
/// minimum grade.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CiOptions {
    pub min_grade: Option<String>,
    pub min_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CiGateResult {
    pub passed: bool,
    pub message: String,
    pub score: f64,
    pub grade: String,
}

/// The parts of a persisted report the gate reads. Everything else in the
/// file is ignored, so reports from other versions still load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriorReport {
    #[serde(default)]
    pub maintainability: Option<PriorMaintainability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriorMaintainability {
    pub score: f64,
    pub grade: String,
}

/// Decide pass/fail. A report without maintainability data fails closed.
pub fn evaluate(report: &PriorReport, options: &CiOptions) -> CiGateResult {
    let Some(m) = &report.maintainability else {
        return CiGateResult {
            passed: false,
            message: "No maintainability data found in scan result.".to_string(),
            score: 0.0,
            grade: "F".to_string(),
        };
    };

    let (passed, message) = match options.min_score {
        Some(min) => (m.score >= min, format!("Score >= {min}")),
        None => {
            let min_grade = options.min_grade.as_deref().unwrap_or(DEFAULT_MIN_GRADE);
            (
                rank_of(&m.grade) >= rank_of(min_grade),
                format!("Grade >= {min_grade}"),
            )
        }
    };

    CiGateResult {
        passed,
        message,
        score: m.score,
        grade: m.grade.clone(),
    }
}

pub fn load_report(path: &Path) -> Result<PriorReport> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::MalformedReport {
        path: path.to_path_buf(),
        source,
    })
}

/// Conventional report locations, in lookup order.
pub fn candidate_paths(root: &Path, cwd: &Path) -> [PathBuf; 4] {
    [
        root.join("reports").join(JSON_REPORT),
        root.join(JSON_REPORT),
        cwd.join("reports").join(JSON_REPORT),
        cwd.join(JSON_REPORT),
    ]
}

/// Load the explicit report, or the first candidate that reads and parses.
pub fn locate_report(
    explicit: Option<&Path>,
    root: &Path,
    cwd: &Path,
) -> Result<(PathBuf, PriorReport)> {
    if let Some(path) = explicit {
        return Ok((path.to_path_buf(), load_report(path)?));
    }
    for candidate in candidate_paths(root, cwd) {
        match load_report(&candidate) {
            Ok(report) => return Ok((candidate, report)),
            Err(err) => debug!(path = %candidate.display(), %err, "report candidate rejected"),
        }
    }
    Err(Error::ReportNotFound)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
