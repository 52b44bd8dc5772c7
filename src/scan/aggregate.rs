use std::collections::BTreeMap;

use super::data::{
    ChurnHotspot, ComplexityHotspot, DirectoryStat, FileRecord, Hotspots, LanguageStat,
    LocHotspot, Totals,
};
use crate::loc::LineCounts;

pub fn totals(files: &[FileRecord]) -> Totals {
    let mut totals = Totals::default();
    for f in files {
        totals.files += 1;
        totals.loc += f.loc;
    }
    totals
}

/// Per-language totals, largest code share first. Ties keep name order.
pub fn languages(files: &[FileRecord], total_code: usize) -> Vec<LanguageStat> {
    let mut by_name: BTreeMap<&str, (usize, LineCounts)> = BTreeMap::new();
    for f in files {
        let entry = by_name.entry(f.language.as_str()).or_default();
        entry.0 += 1;
        entry.1 += f.loc;
    }

    let mut stats: Vec<LanguageStat> = by_name
        .into_iter()
        .map(|(name, (files, loc))| LanguageStat {
            name: name.to_string(),
            files,
            loc,
            percent_of_code: if total_code > 0 {
                loc.code as f64 / total_code as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();
    stats.sort_by(|a, b| b.loc.code.cmp(&a.loc.code));
    stats
}

/// Immediate parent of a `/`-separated path, `.` for root-level files.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) if idx > 0 => &path[..idx],
        _ => ".",
    }
}

/// Per-directory totals. A file counts only toward its immediate parent,
/// never toward ancestors.
pub fn directories(files: &[FileRecord]) -> Vec<DirectoryStat> {
    let mut by_dir: BTreeMap<&str, (usize, LineCounts)> = BTreeMap::new();
    for f in files {
        let entry = by_dir.entry(parent_dir(&f.path)).or_default();
        entry.0 += 1;
        entry.1 += f.loc;
    }

    let mut stats: Vec<DirectoryStat> = by_dir
        .into_iter()
        .map(|(path, (files, loc))| DirectoryStat {
            path: path.to_string(),
            files,
            loc,
        })
        .collect();
    stats.sort_by(|a, b| b.loc.code.cmp(&a.loc.code));
    stats
}

/// Top `top` files by code lines, complexity and commit count. Sorts are
/// stable, so equal metrics keep discovery order.
pub fn hotspots(files: &[FileRecord], top: usize) -> Hotspots {
    let mut by_loc: Vec<&FileRecord> = files.iter().collect();
    by_loc.sort_by(|a, b| b.loc.code.cmp(&a.loc.code));

    let mut by_complexity: Vec<&FileRecord> = files.iter().collect();
    by_complexity.sort_by(|a, b| b.complexity.total_cmp(&a.complexity));

    let mut by_churn: Vec<&FileRecord> = files.iter().filter(|f| f.churn.is_some()).collect();
    by_churn.sort_by_key(|f| std::cmp::Reverse(f.churn.map_or(0, |c| c.commits)));

    Hotspots {
        by_loc: by_loc
            .into_iter()
            .take(top)
            .map(|f| LocHotspot {
                path: f.path.clone(),
                loc_code: f.loc.code,
            })
            .collect(),
        by_complexity: by_complexity
            .into_iter()
            .take(top)
            .map(|f| ComplexityHotspot {
                path: f.path.clone(),
                score: f.complexity,
            })
            .collect(),
        by_churn: by_churn
            .into_iter()
            .take(top)
            .filter_map(|f| {
                f.churn.map(|c| ChurnHotspot {
                    path: f.path.clone(),
                    commits: c.commits,
                    authors: c.authors,
                })
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
