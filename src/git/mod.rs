//! Per-file churn (commit and author counts) from version-control history.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use git2::{Commit, DiffOptions, Repository, Sort};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::util::to_slash;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Churn {
    pub commits: usize,
    pub authors: usize,
}

/// Source of churn data keyed by `/`-separated path relative to the scan root.
/// `None` means the path has no recorded history.
pub trait ChurnSource {
    fn lookup(&self, path: &str) -> Option<Churn>;
}

/// Whether the scan root itself holds a `.git` entry.
pub fn has_git(root: &Path) -> bool {
    root.join(".git").exists()
}

#[derive(Default)]
struct PathHistory {
    commits: usize,
    authors: HashSet<String>,
}

/// Churn index built from one pass over the history reachable from HEAD.
/// Merge commits are skipped; each remaining commit is diffed against its
/// first parent. Renames are not followed.
pub struct GitChurn {
    index: HashMap<String, Churn>,
}

impl GitChurn {
    pub fn open(root: &Path) -> Result<Self, git2::Error> {
        let repo = Repository::open(root)?;
        let index = match build_index(&repo) {
            Ok(index) => index,
            Err(err) => {
                // Typically an unborn HEAD: no history means zero churn everywhere.
                debug!(%err, "no readable history");
                HashMap::new()
            }
        };
        Ok(Self { index })
    }

    /// Open the repository at `root`, degrading to an empty index when it
    /// cannot be opened.
    pub fn open_or_empty(root: &Path) -> Self {
        Self::open(root).unwrap_or_else(|err| {
            warn!(root = %root.display(), %err, "git history unavailable, churn defaults to zero");
            Self {
                index: HashMap::new(),
            }
        })
    }

    pub fn tracked_paths(&self) -> usize {
        self.index.len()
    }
}

impl ChurnSource for GitChurn {
    fn lookup(&self, path: &str) -> Option<Churn> {
        self.index.get(path).copied()
    }
}

fn build_index(repo: &Repository) -> Result<HashMap<String, Churn>, git2::Error> {
    let mut history: HashMap<String, PathHistory> = HashMap::new();
    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TIME)?;

    for oid in revwalk {
        let commit = repo.find_commit(oid?)?;
        if commit.parent_count() > 1 {
            continue;
        }
        let author = commit.author().name().unwrap_or("unknown").to_string();
        for path in changed_files(repo, &commit)? {
            let entry = history.entry(path).or_default();
            entry.commits += 1;
            entry.authors.insert(author.clone());
        }
    }

    Ok(history
        .into_iter()
        .map(|(path, h)| {
            let churn = Churn {
                commits: h.commits,
                authors: h.authors.len(),
            };
            (path, churn)
        })
        .collect())
}

fn changed_files(repo: &Repository, commit: &Commit) -> Result<Vec<String>, git2::Error> {
    let tree = commit.tree()?;
    let parent_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };

    let mut opts = DiffOptions::new();
    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;

    Ok(diff
        .deltas()
        .filter_map(|delta| delta.new_file().path().map(to_slash))
        .collect())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
