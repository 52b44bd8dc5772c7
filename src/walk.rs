use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::util::to_slash;

/// Paths never worth scanning: dependency trees, build output, lockfiles and
/// minified bundles.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "reports",
    ".next",
    ".vercel",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
    "*.min.*",
];

/// Files this tool writes itself.
pub const ARTIFACTS: &[&str] = &["codeworth.report.json", "codeworth.report.md", "badge.svg"];

/// Per-directory ignore file honoured next to `.gitignore`.
pub const IGNORE_FILE: &str = ".codeworthignore";

/// Lists the files of a tree as sorted, `/`-separated paths relative to `root`.
pub trait FileDiscoverer {
    fn discover(&self, root: &Path, excludes: &[String]) -> Result<Vec<String>>;
}

/// Glob-based path filter.
///
/// A pattern without `/` is tested against every component of a path, so
/// `vendor` or `*.min.*` match at any depth. A pattern containing `/` is
/// anchored at the root and tested against the path and each of its
/// ancestors, so `generated/api` excludes everything below that directory.
/// Leading and trailing slashes are stripped.
#[derive(Debug, Default)]
pub struct ExcludeFilter {
    components: GlobSet,
    paths: GlobSet,
    empty: bool,
}

impl ExcludeFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut components = GlobSetBuilder::new();
        let mut paths = GlobSetBuilder::new();
        let mut count = 0;

        for raw in patterns {
            let pattern = raw.as_ref().trim().trim_matches('/');
            if pattern.is_empty() {
                continue;
            }
            if pattern.contains('/') {
                paths.add(build_glob(pattern, true)?);
            } else {
                components.add(build_glob(pattern, false)?);
            }
            count += 1;
        }

        Ok(Self {
            components: components.build().map_err(|source| Error::Pattern {
                pattern: patterns_summary(patterns),
                source,
            })?,
            paths: paths.build().map_err(|source| Error::Pattern {
                pattern: patterns_summary(patterns),
                source,
            })?,
            empty: count == 0,
        })
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Whether the `/`-separated relative path `rel` is excluded.
    pub fn excludes(&self, rel: &str) -> bool {
        if self.empty || rel.is_empty() {
            return false;
        }
        if rel.split('/').any(|c| self.components.is_match(c)) {
            return true;
        }
        let mut candidate = rel;
        loop {
            if self.paths.is_match(candidate) {
                return true;
            }
            match candidate.rfind('/') {
                Some(idx) => candidate = &candidate[..idx],
                None => return false,
            }
        }
    }
}

fn build_glob(pattern: &str, literal_separator: bool) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(literal_separator)
        .build()
        .map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn patterns_summary<S: AsRef<str>>(patterns: &[S]) -> String {
    patterns
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Filesystem discoverer backed by `ignore::WalkBuilder`.
///
/// Applies the default ignores and artifact names, `.gitignore` and
/// `.codeworthignore` files found in the tree, the caller's exclude globs, and
/// the output directory when it lies inside the root.
#[derive(Debug, Default)]
pub struct WalkDiscoverer {
    outdir: Option<PathBuf>,
}

impl WalkDiscoverer {
    pub fn new(outdir: Option<PathBuf>) -> Self {
        Self { outdir }
    }

    /// Output directory relative to `root`, when it lies strictly inside it.
    fn outdir_within(&self, root: &Path) -> Option<String> {
        let outdir = std::path::absolute(self.outdir.as_ref()?).ok()?;
        let root = std::path::absolute(root).ok()?;
        let rel = outdir.strip_prefix(&root).ok()?;
        let rel = to_slash(rel);
        (!rel.is_empty()).then_some(rel)
    }
}

impl FileDiscoverer for WalkDiscoverer {
    fn discover(&self, root: &Path, excludes: &[String]) -> Result<Vec<String>> {
        let patterns: Vec<&str> = DEFAULT_IGNORES
            .iter()
            .chain(ARTIFACTS)
            .copied()
            .chain(excludes.iter().map(String::as_str))
            .collect();
        let filter = ExcludeFilter::new(&patterns)?;
        let outdir = self.outdir_within(root);
        if let Some(out) = &outdir {
            debug!(outdir = %out, "excluding output directory");
        }

        let base = root.to_path_buf();
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .follow_links(false)
            .parents(false)
            .ignore(false)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .add_custom_ignore_filename(IGNORE_FILE)
            .filter_entry(move |entry| {
                let Ok(rel) = entry.path().strip_prefix(&base) else {
                    return true;
                };
                let rel = to_slash(rel);
                if let Some(out) = &outdir
                    && (rel == *out || rel.starts_with(&format!("{out}/")))
                {
                    return false;
                }
                !filter.excludes(&rel)
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if let Ok(rel) = entry.path().strip_prefix(root) {
                files.push(to_slash(rel));
            }
        }
        files.sort();
        debug!(count = files.len(), root = %root.display(), "discovered files");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
