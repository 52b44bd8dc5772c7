/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Format an integer with thousand separators (e.g. -1234567 → "-1,234,567").
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Escape backslashes and pipe characters so text stays inside its
/// markdown table cell. Backslashes go first to avoid double-escaping.
pub fn escape_md(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}

/// Fixed-width bar of `width` cells, filled in proportion to `score`/100.
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
