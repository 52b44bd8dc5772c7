use super::*;
use crate::scan::{result_from_files, test_record};

fn ctx_with<'a>(root: &'a Path, entries: &'a [String], scan: &'a ScanResult) -> CheckContext<'a> {
    CheckContext {
        root,
        root_entries: entries,
        scan,
    }
}

#[test]
fn run_checks_awards_points_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let scan = result_from_files(Vec::new(), false);
    let entries = vec!["README.md".to_string(), "CONTRIBUTING.md".to_string()];
    let ctx = ctx_with(dir.path(), &entries, &scan);

    let (points, notes) = run_checks(HYGIENE_CHECKS, &ctx);
    assert_eq!(points, 10);
    assert_eq!(notes, vec!["README exists", "CONTRIBUTING exists"]);
}

#[test]
fn run_checks_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let scan = result_from_files(Vec::new(), false);
    let ctx = ctx_with(dir.path(), &[], &scan);
    assert_eq!(run_checks(&[], &ctx), (0, Vec::new()));
}

#[test]
fn linter_detected_from_extended_list() {
    let dir = tempfile::tempdir().unwrap();
    let scan = result_from_files(Vec::new(), false);
    for name in ["rustfmt.toml", ".prettierrc", "biome.json", "eslint.config.mjs", ".golangci.yml"] {
        let entries = vec![name.to_string()];
        let ctx = ctx_with(dir.path(), &entries, &scan);
        let (_, notes) = run_checks(STRUCTURE_CHECKS, &ctx);
        assert!(notes.iter().any(|n| n == "Linter/Formatter detected"), "{name}");
    }
}

#[test]
fn test_runner_detected_for_python() {
    let dir = tempfile::tempdir().unwrap();
    let scan = result_from_files(Vec::new(), false);
    let entries = vec!["pytest.ini".to_string()];
    let ctx = ctx_with(dir.path(), &entries, &scan);
    let (points, notes) = run_checks(TESTING_CHECKS, &ctx);
    assert_eq!(points, 5);
    assert_eq!(notes, vec!["Test runner config detected"]);
}

#[test]
fn huge_file_boundary_is_exclusive() {
    let at_limit = result_from_files(vec![test_record("a.ts", 800, 0.0)], false);
    assert_eq!(huge_file_check(&at_limit), (10, "No huge files".to_string()));
    let over = result_from_files(vec![test_record("a.ts", 801, 0.0)], false);
    assert_eq!(huge_file_check(&over), (5, "Few huge files (1)".to_string()));
}

#[test]
fn root_entries_lists_names() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    let mut names = root_entries(dir.path());
    names.sort();
    assert_eq!(names, vec!["a.txt", "sub"]);
}

#[test]
fn root_entries_missing_dir_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(root_entries(&dir.path().join("nope")).is_empty());
}

#[test]
fn manifest_without_dependencies_counts_zero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), r#"{"name": "x"}"#).unwrap();
    assert_eq!(manifest_dependency_count(dir.path()), Some(0));
    assert_eq!(manifest_check(dir.path()), (5, Some("Low dependencies")));
}

#[test]
fn package_json_wins_over_cargo() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), r#"{"dependencies": {"a": "1"}}"#).unwrap();
    std::fs::write(
        dir.path().join("Cargo.toml"),
        "[dependencies]\na = \"1\"\nb = \"1\"\n",
    )
    .unwrap();
    assert_eq!(manifest_dependency_count(dir.path()), Some(1));
}

#[test]
fn no_manifest_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(manifest_dependency_count(dir.path()), None);
    assert_eq!(manifest_check(dir.path()), (2, None));
}
