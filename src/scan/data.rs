use serde::Serialize;

use crate::git::Churn;
use crate::loc::LineCounts;

/// Metrics for one discovered file. Built once per scan, never mutated
/// after churn has been attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    pub size_bytes: u64,
    pub language: String,
    pub loc: LineCounts,
    pub complexity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub churn: Option<Churn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub name: String,
    pub files: usize,
    pub loc: LineCounts,
    pub percent_of_code: f64,
}

/// Files grouped by their immediate parent directory (`.` for the root).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryStat {
    pub path: String,
    pub files: usize,
    pub loc: LineCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub files: usize,
    pub loc: LineCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoMeta {
    pub name: String,
    pub has_git: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub scanned_path: String,
    pub timestamp: String,
    pub repo: RepoMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocHotspot {
    pub path: String,
    pub loc_code: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityHotspot {
    pub path: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnHotspot {
    pub path: String,
    pub commits: usize,
    pub authors: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspots {
    pub by_loc: Vec<LocHotspot>,
    pub by_complexity: Vec<ComplexityHotspot>,
    pub by_churn: Vec<ChurnHotspot>,
}

/// Aggregate of one scan, consumed by scoring, valuation and the writers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub meta: Meta,
    pub files: Vec<FileRecord>,
    pub totals: Totals,
    pub languages: Vec<LanguageStat>,
    pub directories: Vec<DirectoryStat>,
    pub hotspots: Hotspots,
}

impl ScanResult {
    pub fn language(&self, name: &str) -> Option<&LanguageStat> {
        self.languages.iter().find(|l| l.name == name)
    }

    pub fn has_churn(&self) -> bool {
        self.files.iter().any(|f| f.churn.is_some())
    }
}
