//! Scanner: turns a discovered file list into a [`ScanResult`].
//!
//! Each file is read once and classified independently; aggregation is a
//! pure fold over the finished records. Per-file failures never abort the
//! scan, they yield zero-valued metrics.

pub mod aggregate;
pub mod data;

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::complexity;
use crate::error::Result;
use crate::git::{self, ChurnSource};
use crate::loc::{LineCounts, count_lines, language_of};
use crate::util::read_source;
use crate::walk::FileDiscoverer;

pub use data::{FileRecord, ScanResult};
use data::{Meta, RepoMeta};

/// Only this many of the largest files get a churn lookup.
pub const CHURN_FILE_LIMIT: usize = 200;

pub const DEFAULT_TOP: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    pub excludes: Vec<String>,
    pub top: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excludes: Vec::new(),
            top: DEFAULT_TOP,
        }
    }
}

/// Scan `root`. Pass `churn` only when history should be consulted; the
/// caller decides based on [`git::has_git`] and user settings.
pub fn scan(
    root: &Path,
    discoverer: &dyn FileDiscoverer,
    churn: Option<&dyn ChurnSource>,
    options: &ScanOptions,
) -> Result<ScanResult> {
    let paths = discoverer.discover(root, &options.excludes)?;
    info!(count = paths.len(), "found files");

    let mut files: Vec<FileRecord> = paths.iter().map(|rel| build_record(root, rel)).collect();

    if let Some(source) = churn {
        attach_churn(&mut files, source);
    }

    let totals = aggregate::totals(&files);
    let languages = aggregate::languages(&files, totals.loc.code);
    let directories = aggregate::directories(&files);
    let hotspots = aggregate::hotspots(&files, options.top);

    Ok(ScanResult {
        meta: meta(root),
        files,
        totals,
        languages,
        directories,
        hotspots,
    })
}

fn build_record(root: &Path, rel: &str) -> FileRecord {
    let abs = root.join(rel);
    let language = language_of(rel);
    let size_bytes = fs::metadata(&abs).map(|m| m.len()).unwrap_or_else(|err| {
        debug!(path = rel, %err, "stat failed, size counts as zero");
        0
    });

    let (loc, complexity) = match read_source(&abs) {
        Some(content) => (
            count_lines(&content, language),
            complexity::analyze_path_content(Path::new(rel), &content).score,
        ),
        None => (LineCounts::default(), 0.0),
    };

    FileRecord {
        path: rel.to_string(),
        size_bytes,
        language: language.to_string(),
        loc,
        complexity,
        churn: None,
    }
}

/// Look up churn for the largest files by code lines. A path the source does
/// not know still gets a zero record.
fn attach_churn(files: &mut [FileRecord], source: &dyn ChurnSource) {
    let mut order: Vec<usize> = (0..files.len()).collect();
    order.sort_by(|&a, &b| files[b].loc.code.cmp(&files[a].loc.code));
    order.truncate(CHURN_FILE_LIMIT);
    info!(count = order.len(), "looking up churn");

    for idx in order {
        let file = &mut files[idx];
        file.churn = Some(source.lookup(&file.path).unwrap_or_default());
    }
}

fn meta(root: &Path) -> Meta {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let name = absolute
        .components()
        .next_back()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_default();
    Meta {
        scanned_path: absolute.display().to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        repo: RepoMeta {
            name,
            has_git: git::has_git(root),
        },
    }
}

/// Assemble a result from prepared records, for tests of downstream stages.
#[cfg(test)]
pub(crate) fn result_from_files(files: Vec<FileRecord>, has_git: bool) -> ScanResult {
    let totals = aggregate::totals(&files);
    ScanResult {
        meta: Meta {
            scanned_path: "/repo".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
            repo: RepoMeta {
                name: "repo".to_string(),
                has_git,
            },
        },
        languages: aggregate::languages(&files, totals.loc.code),
        directories: aggregate::directories(&files),
        hotspots: aggregate::hotspots(&files, DEFAULT_TOP),
        totals,
        files,
    }
}

/// A record with only code lines and complexity filled in.
#[cfg(test)]
pub(crate) fn test_record(path: &str, code: usize, complexity: f64) -> FileRecord {
    FileRecord {
        path: path.to_string(),
        size_bytes: 0,
        language: language_of(path).to_string(),
        loc: LineCounts {
            code,
            comment: 0,
            blank: 0,
        },
        complexity,
        churn: None,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
