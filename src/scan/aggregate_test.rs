use super::*;
use crate::git::Churn;

fn record(path: &str, language: &str, code: usize, complexity: f64) -> FileRecord {
    FileRecord {
        path: path.to_string(),
        size_bytes: 0,
        language: language.to_string(),
        loc: LineCounts {
            code,
            comment: 1,
            blank: 2,
        },
        complexity,
        churn: None,
    }
}

#[test]
fn parent_dir_of_nested_and_root_files() {
    assert_eq!(parent_dir("a/b/c.ts"), "a/b");
    assert_eq!(parent_dir("src/main.rs"), "src");
    assert_eq!(parent_dir("README.md"), ".");
}

#[test]
fn totals_sum_all_files() {
    let files = vec![record("a.rs", "Rust", 10, 0.0), record("b.rs", "Rust", 5, 0.0)];
    let t = totals(&files);
    assert_eq!(t.files, 2);
    assert_eq!(t.loc.code, 15);
    assert_eq!(t.loc.comment, 2);
    assert_eq!(t.loc.blank, 4);
}

#[test]
fn directories_group_by_immediate_parent_only() {
    let files = vec![
        record("a/b/c.ts", "TypeScript", 10, 0.0),
        record("a/d.ts", "TypeScript", 3, 0.0),
    ];
    let dirs = directories(&files);
    let ab = dirs.iter().find(|d| d.path == "a/b").unwrap();
    assert_eq!(ab.files, 1);
    assert_eq!(ab.loc.code, 10);
    let a = dirs.iter().find(|d| d.path == "a").unwrap();
    assert_eq!(a.files, 1, "a/b/c.ts must not count toward a");
    assert_eq!(a.loc.code, 3);
}

#[test]
fn directories_root_files_group_under_dot() {
    let files = vec![record("README.md", "Markdown", 4, 0.0), record("main.rs", "Rust", 6, 0.0)];
    let dirs = directories(&files);
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].path, ".");
    assert_eq!(dirs[0].files, 2);
}

#[test]
fn directories_sorted_by_code_then_name() {
    let files = vec![
        record("z/a.rs", "Rust", 5, 0.0),
        record("m/a.rs", "Rust", 50, 0.0),
        record("b/a.rs", "Rust", 5, 0.0),
    ];
    let order: Vec<String> = directories(&files).into_iter().map(|d| d.path).collect();
    assert_eq!(order, vec!["m", "b", "z"]);
}

#[test]
fn languages_percent_and_order() {
    let files = vec![
        record("a.rs", "Rust", 30, 0.0),
        record("b.py", "Python", 60, 0.0),
        record("c.rs", "Rust", 10, 0.0),
    ];
    let langs = languages(&files, 100);
    assert_eq!(langs[0].name, "Python");
    assert_eq!(langs[0].files, 1);
    assert!((langs[0].percent_of_code - 60.0).abs() < 1e-9);
    assert_eq!(langs[1].name, "Rust");
    assert_eq!(langs[1].files, 2);
    assert!((langs[1].percent_of_code - 40.0).abs() < 1e-9);
}

#[test]
fn languages_zero_code_has_zero_percent() {
    let files = vec![record("a.json", "JSON", 0, 0.0)];
    assert_eq!(languages(&files, 0)[0].percent_of_code, 0.0);
}

#[test]
fn hotspots_truncate_to_top() {
    let files: Vec<FileRecord> = (0..30)
        .map(|i| record(&format!("f{i}.rs"), "Rust", i, i as f64))
        .collect();
    let h = hotspots(&files, 5);
    assert_eq!(h.by_loc.len(), 5);
    assert_eq!(h.by_loc[0].path, "f29.rs");
    assert_eq!(h.by_loc[0].loc_code, 29);
    assert_eq!(h.by_complexity[0].score, 29.0);
    assert!(h.by_churn.is_empty());
}

#[test]
fn hotspots_ties_keep_discovery_order() {
    let files = vec![
        record("first.rs", "Rust", 10, 7.0),
        record("second.rs", "Rust", 10, 7.0),
    ];
    let h = hotspots(&files, 20);
    assert_eq!(h.by_loc[0].path, "first.rs");
    assert_eq!(h.by_complexity[0].path, "first.rs");
}

#[test]
fn hotspots_churn_only_files_with_churn() {
    let mut a = record("a.rs", "Rust", 1, 0.0);
    a.churn = Some(Churn {
        commits: 3,
        authors: 1,
    });
    let mut b = record("b.rs", "Rust", 1, 0.0);
    b.churn = Some(Churn {
        commits: 9,
        authors: 4,
    });
    let c = record("c.rs", "Rust", 1, 0.0);

    let h = hotspots(&[a, b, c], 20);
    assert_eq!(h.by_churn.len(), 2);
    assert_eq!(h.by_churn[0].path, "b.rs");
    assert_eq!(h.by_churn[0].authors, 4);
}
