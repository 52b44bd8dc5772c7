use super::*;

#[test]
fn full_document() {
    let text = r#"
[scan]
outdir = "out"
top = 5
git = false
exclude = ["vendor", "generated/**"]

[valuation]
rate = 14.5
preset = "senior"

[ci]
min_grade = "B"
min_score = 70
"#;
    let config = parse(text, Path::new("codeworth.toml")).unwrap();
    assert_eq!(config.scan.outdir, Some(PathBuf::from("out")));
    assert_eq!(config.scan.top, Some(5));
    assert_eq!(config.scan.git, Some(false));
    assert_eq!(config.scan.exclude, vec!["vendor", "generated/**"]);
    assert_eq!(config.valuation.rate, Some(14.5));
    assert_eq!(config.valuation.preset, Some(RatePreset::Senior));
    assert_eq!(config.ci.min_grade.as_deref(), Some("B"));
    assert_eq!(config.ci.min_score, Some(70.0));
}

#[test]
fn partial_document_uses_defaults() {
    let config = parse("[ci]\nmin_grade = \"A\"\n", Path::new("c.toml")).unwrap();
    assert_eq!(config.scan, ScanConfig::default());
    assert_eq!(config.valuation, ValuationConfig::default());
    assert_eq!(config.ci.min_grade.as_deref(), Some("A"));
}

#[test]
fn empty_document() {
    assert_eq!(parse("", Path::new("c.toml")).unwrap(), Config::default());
}

#[test]
fn unknown_preset_is_error() {
    let err = parse("[valuation]\npreset = \"wizard\"\n", Path::new("c.toml")).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[scan\ntop = ").unwrap();
    let err = load(dir.path(), None).unwrap_err();
    assert!(err.to_string().contains("codeworth.toml"), "{err}");
}

#[test]
fn missing_implicit_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load(dir.path(), None).unwrap(), Config::default());
}

#[test]
fn missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    assert!(matches!(load(dir.path(), Some(&path)), Err(Error::Io { .. })));
}

#[test]
fn explicit_file_wins_over_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[scan]\ntop = 1\n").unwrap();
    let custom = dir.path().join("custom.toml");
    fs::write(&custom, "[scan]\ntop = 9\n").unwrap();
    assert_eq!(load(dir.path(), Some(&custom)).unwrap().scan.top, Some(9));
    assert_eq!(load(dir.path(), None).unwrap().scan.top, Some(1));
}
