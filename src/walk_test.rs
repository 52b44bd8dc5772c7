use std::fs;

use tempfile::tempdir;

use super::*;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "x\n").unwrap();
}

fn discover(root: &Path, excludes: &[&str]) -> Vec<String> {
    let excludes: Vec<String> = excludes.iter().map(|s| s.to_string()).collect();
    WalkDiscoverer::default().discover(root, &excludes).unwrap()
}

// ── ExcludeFilter ──────────────────────────────────────────────────────

#[test]
fn exclude_filter_empty() {
    let f = ExcludeFilter::new::<&str>(&[]).unwrap();
    assert!(f.is_empty());
    assert!(!f.excludes("src/main.rs"));
}

#[test]
fn exclude_filter_blank_patterns_ignored() {
    let f = ExcludeFilter::new(&["", "  ", "/"]).unwrap();
    assert!(f.is_empty());
}

#[test]
fn exclude_filter_name_matches_any_depth() {
    let f = ExcludeFilter::new(&["vendor"]).unwrap();
    assert!(f.excludes("vendor"));
    assert!(f.excludes("vendor/lib.js"));
    assert!(f.excludes("a/b/vendor/lib.js"));
    assert!(!f.excludes("src/vendored.js"));
}

#[test]
fn exclude_filter_wildcard_component() {
    let f = ExcludeFilter::new(&["*.min.*"]).unwrap();
    assert!(f.excludes("static/app.min.js"));
    assert!(f.excludes("style.min.css"));
    assert!(!f.excludes("static/app.js"));
}

#[test]
fn exclude_filter_path_pattern_is_anchored() {
    let f = ExcludeFilter::new(&["generated/api"]).unwrap();
    assert!(f.excludes("generated/api"));
    assert!(f.excludes("generated/api/client.ts"));
    assert!(!f.excludes("src/generated/api/client.ts"));
    assert!(!f.excludes("generated/other.ts"));
}

#[test]
fn exclude_filter_path_glob_does_not_cross_separators() {
    let f = ExcludeFilter::new(&["src/*.ts"]).unwrap();
    assert!(f.excludes("src/a.ts"));
    assert!(!f.excludes("src/deep/a.ts"));
}

#[test]
fn exclude_filter_double_star() {
    let f = ExcludeFilter::new(&["docs/**"]).unwrap();
    assert!(f.excludes("docs/guide/intro.md"));
    assert!(!f.excludes("src/docs.rs"));
}

#[test]
fn exclude_filter_trailing_slash_stripped() {
    let f = ExcludeFilter::new(&["tmp/"]).unwrap();
    assert!(f.excludes("tmp/cache.bin"));
}

#[test]
fn exclude_filter_invalid_glob_is_error() {
    let err = ExcludeFilter::new(&["src/[unclosed"]).unwrap_err();
    assert!(matches!(err, Error::Pattern { .. }), "{err}");
}

// ── WalkDiscoverer ─────────────────────────────────────────────────────

#[test]
fn discover_lists_sorted_relative_paths() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "src/main.rs");
    touch(dir.path(), "README.md");
    touch(dir.path(), "src/core/lib.rs");

    assert_eq!(
        discover(dir.path(), &[]),
        vec!["README.md", "src/core/lib.rs", "src/main.rs"]
    );
}

#[test]
fn discover_applies_default_ignores() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "index.js");
    touch(dir.path(), "node_modules/left-pad/index.js");
    touch(dir.path(), "dist/bundle.js");
    touch(dir.path(), "build/out.js");
    touch(dir.path(), "coverage/lcov.info");
    touch(dir.path(), "assets/app.min.js");
    touch(dir.path(), "package-lock.json");
    touch(dir.path(), "yarn.lock");

    assert_eq!(discover(dir.path(), &[]), vec!["index.js"]);
}

#[test]
fn discover_skips_own_artifacts() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "main.rs");
    touch(dir.path(), "codeworth.report.json");
    touch(dir.path(), "codeworth.report.md");
    touch(dir.path(), "badge.svg");

    assert_eq!(discover(dir.path(), &[]), vec!["main.rs"]);
}

#[test]
fn discover_includes_dotfiles() {
    let dir = tempdir().unwrap();
    touch(dir.path(), ".eslintrc.json");
    touch(dir.path(), ".github/workflows/ci.yml");

    assert_eq!(
        discover(dir.path(), &[]),
        vec![".eslintrc.json", ".github/workflows/ci.yml"]
    );
}

#[test]
fn discover_honours_gitignore_without_repo() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "secret.txt\ntmp/\n").unwrap();
    touch(dir.path(), "main.rs");
    touch(dir.path(), "secret.txt");
    touch(dir.path(), "tmp/scratch.rs");

    assert_eq!(discover(dir.path(), &[]), vec![".gitignore", "main.rs"]);
}

#[test]
fn discover_honours_codeworthignore() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(IGNORE_FILE), "fixtures\n").unwrap();
    touch(dir.path(), "main.rs");
    touch(dir.path(), "fixtures/big.json");

    assert_eq!(discover(dir.path(), &[]), vec![IGNORE_FILE, "main.rs"]);
}

#[test]
fn discover_applies_excludes() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "main.rs");
    touch(dir.path(), "vendor/dep.rs");
    touch(dir.path(), "src/gen/types.rs");
    touch(dir.path(), "src/lib.rs");

    assert_eq!(
        discover(dir.path(), &["vendor", "src/gen"]),
        vec!["main.rs", "src/lib.rs"]
    );
}

#[test]
fn discover_invalid_exclude_fails() {
    let dir = tempdir().unwrap();
    let result = WalkDiscoverer::default().discover(dir.path(), &["a/[b".to_string()]);
    assert!(result.is_err());
}

#[test]
fn discover_skips_outdir_inside_root() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "main.rs");
    touch(dir.path(), "out/analysis/old.json");

    let discoverer = WalkDiscoverer::new(Some(dir.path().join("out/analysis")));
    let files = discoverer.discover(dir.path(), &[]).unwrap();
    assert_eq!(files, vec!["main.rs"]);
}

#[test]
fn discover_outdir_outside_root_has_no_effect() {
    let dir = tempdir().unwrap();
    let other = tempdir().unwrap();
    touch(dir.path(), "main.rs");

    let discoverer = WalkDiscoverer::new(Some(other.path().to_path_buf()));
    assert_eq!(discoverer.discover(dir.path(), &[]).unwrap(), vec!["main.rs"]);
}

#[test]
fn discover_outdir_equal_to_root_is_not_excluded() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "main.rs");

    let discoverer = WalkDiscoverer::new(Some(dir.path().to_path_buf()));
    assert_eq!(discoverer.discover(dir.path(), &[]).unwrap(), vec!["main.rs"]);
}
