use super::*;

use crate::git::Churn;
use crate::scan::{result_from_files, test_record};
use crate::score::{Category, CategoryScore, Grade};
use crate::valuation::{Assumptions, Confidence, Multipliers};

/// Two TypeScript files, one of them an extreme hotspot with churn, plus a
/// markdown file at the root.
pub(crate) fn sample_report() -> Report {
    let mut hot = test_record("src/app.ts", 1200, 91.3);
    hot.churn = Some(Churn {
        commits: 7,
        authors: 2,
    });
    let files = vec![
        hot,
        test_record("src/util.ts", 300, 40.0),
        test_record("README.md", 25, 0.0),
    ];
    let scan = result_from_files(files, true);

    let cat = |category: Category, score: u32, notes: &[&str]| CategoryScore {
        category,
        score,
        max: category.max(),
        notes: notes.iter().map(|n| n.to_string()).collect(),
    };
    let maintainability = MaintainabilityReport {
        score: 62,
        grade: Grade::D,
        breakdown: vec![
            cat(Category::Hygiene, 5, &["README detected"]),
            cat(Category::Structure, 20, &["1 huge files", "Organized structure"]),
            cat(Category::Complexity, 12, &["Moderate complexity", "1 extreme hotspots"]),
            cat(Category::Testing, 15, &["Test directory found"]),
            cat(Category::Dependencies, 10, &[]),
        ],
        quick_wins: vec!["Add a LICENSE file.".to_string()],
    };

    let valuation = Valuation {
        rebuild_cost: 11_500,
        risk_adjusted_value: 12_075,
        confidence: Confidence::Medium,
        assumptions: Assumptions {
            rate_model: "per_loc".to_string(),
            loc_rate_usd: 10.0,
            multipliers: Multipliers {
                complexity: 0.968,
                tests: 1.1,
                docs: 1.0,
                churn: 1.05,
                deps: 1.05,
            },
        },
    };

    Report {
        scan,
        maintainability,
        valuation,
    }
}

#[test]
fn json_flattens_scan_fields() {
    let value = serde_json::to_value(sample_report()).unwrap();
    for key in [
        "meta",
        "files",
        "totals",
        "languages",
        "directories",
        "hotspots",
        "maintainability",
        "valuation",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(value.get("scan").is_none());
    assert_eq!(value["meta"]["repo"]["hasGit"], true);
    assert_eq!(value["maintainability"]["grade"], "D");
    assert_eq!(value["maintainability"]["quickWins"][0], "Add a LICENSE file.");
    assert_eq!(value["valuation"]["confidence"], "MEDIUM");
    assert_eq!(value["valuation"]["assumptions"]["rateModel"], "per_loc");
    assert_eq!(value["hotspots"]["byChurn"][0]["commits"], 7);
}

#[test]
fn file_churn_omitted_when_absent() {
    let value = serde_json::to_value(sample_report()).unwrap();
    let files = value["files"].as_array().unwrap();
    assert!(files[0].get("churn").is_some());
    assert!(files[1].get("churn").is_none());
}

#[test]
fn write_all_creates_outdir_and_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let outdir = dir.path().join("nested").join("reports");
    let written = write_all(&sample_report(), &outdir, Outputs::default()).unwrap();
    assert_eq!(written, vec![outdir.join(JSON_REPORT), outdir.join(MD_REPORT)]);

    let json = fs::read_to_string(outdir.join(JSON_REPORT)).unwrap();
    assert!(json.starts_with("{\n  \""), "not pretty printed");
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["maintainability"]["score"], 62);

    let md = fs::read_to_string(outdir.join(MD_REPORT)).unwrap();
    assert!(md.starts_with("# Codeworth Report\n"));
}

#[test]
fn written_report_is_readable_by_ci_gate() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&sample_report(), dir.path()).unwrap();
    let prior = crate::ci::load_report(&path).unwrap();
    let m = prior.maintainability.unwrap();
    assert_eq!(m.score, 62.0);
    assert_eq!(m.grade, "D");
}

#[test]
fn write_all_respects_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = Outputs {
        json: false,
        markdown: true,
    };
    let written = write_all(&sample_report(), dir.path(), outputs).unwrap();
    assert_eq!(written, vec![dir.path().join(MD_REPORT)]);
    assert!(!dir.path().join(JSON_REPORT).exists());
}

#[test]
fn write_to_unwritable_outdir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").unwrap();
    let result = write_all(&sample_report(), &blocker.join("out"), Outputs::default());
    assert!(matches!(result, Err(Error::Io { .. })));
}
