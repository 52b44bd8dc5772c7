use super::*;

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn format_thousands_works() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1000), "1,000");
    assert_eq!(format_thousands(1234567), "1,234,567");
    assert_eq!(format_thousands(-11500), "-11,500");
}

#[test]
fn escape_md_no_special_chars() {
    assert_eq!(escape_md("src/main.rs"), "src/main.rs");
}

#[test]
fn escape_md_pipe() {
    assert_eq!(escape_md("foo|bar.rs"), "foo\\|bar.rs");
}

#[test]
fn escape_md_backslash_and_pipe() {
    assert_eq!(escape_md("path\\|file.rs"), "path\\\\\\|file.rs");
}

#[test]
fn score_bar_fill() {
    assert_eq!(score_bar(0.0, 20), "░".repeat(20));
    assert_eq!(score_bar(100.0, 20), "█".repeat(20));
    assert_eq!(score_bar(87.0, 20), format!("{}{}", "█".repeat(17), "░".repeat(3)));
    assert_eq!(score_bar(150.0, 4), "████");
}
