use std::fs;
use std::path::{Path, PathBuf};

use super::{MD_REPORT, Report};
use crate::error::{Error, Result};
use crate::report_helpers::{escape_md, format_thousands, score_bar};
use crate::score::EXTREME_COMPLEXITY;

const BAR_WIDTH: usize = 20;
const TOP_ROWS: usize = 10;

fn money(value: i64) -> String {
    format!("${}", format_thousands(value))
}

fn count(n: usize) -> String {
    format_thousands(n as i64)
}

fn recommendation(report: &Report) -> &str {
    let m = &report.maintainability;
    match m.quick_wins.first() {
        Some(win) => win.as_str(),
        None if m.score < 80 => "Focus on refactoring complex hotspots.",
        None => "Keep up the good work!",
    }
}

fn top_risk(report: &Report) -> String {
    match report.maintainability.weakest() {
        Some(c) => format!("{} (Score: {}/{})", c.category, c.score, c.max),
        None => "None".to_string(),
    }
}

fn summary(out: &mut Vec<String>, report: &Report) {
    let m = &report.maintainability;
    let v = &report.valuation;
    out.push("> **Executive Summary**".to_string());
    out.push("> ".to_string());
    out.push(format!("> **Overall Grade**: {} ({}/100)", m.grade, m.score));
    out.push(format!("> **Rebuild Cost**: {}", money(v.rebuild_cost)));
    out.push(format!("> **Risk-Adjusted Value**: {}", money(v.risk_adjusted_value)));
    out.push(format!("> **Top Risk**: {}", top_risk(report)));
    out.push(format!("> **Primary Recommendation**: {}", recommendation(report)));
}

fn metadata(out: &mut Vec<String>, report: &Report) {
    let meta = &report.scan.meta;
    out.push("### Scan Metadata".to_string());
    out.push(format!("- **Repo**: {}", meta.repo.name));
    out.push(format!("- **Path**: `{}`", meta.scanned_path));
    out.push(format!("- **Date**: {}", meta.timestamp));
    out.push(format!("- **Scanned Files**: {}", count(report.scan.totals.files)));
    out.push(format!("- **Total LOC**: {}", count(report.scan.totals.loc.total())));
    out.push(format!(
        "- **Git History**: {}",
        if meta.repo.has_git { "yes" } else { "no" }
    ));
}

fn valuation(out: &mut Vec<String>, report: &Report) {
    let v = &report.valuation;
    let m = &v.assumptions.multipliers;
    out.push("## Valuation Details".to_string());
    out.push(String::new());
    out.push("| Metric | Value |".to_string());
    out.push("|--------|------:|".to_string());
    out.push(format!("| **Rebuild Cost** | {} |", money(v.rebuild_cost)));
    out.push(format!("| **Risk-Adjusted** | {} |", money(v.risk_adjusted_value)));
    out.push(format!("| **Confidence** | **{}** |", v.confidence));
    out.push(String::new());
    out.push("### Valuation Inputs".to_string());
    out.push(format!(
        "- **Rate Model**: {} (${}/LOC)",
        v.assumptions.rate_model, v.assumptions.loc_rate_usd
    ));
    out.push(String::new());
    out.push("### Multipliers".to_string());
    out.push(format!("- Complexity: x{:.2}", m.complexity));
    out.push(format!("- Tests: x{:.2}", m.tests));
    out.push(format!("- Docs: x{:.2}", m.docs));
    out.push(format!("- Churn: x{:.2}", m.churn));
    out.push(format!("- Dependencies: x{:.2}", m.deps));
}

fn breakdown(out: &mut Vec<String>, report: &Report) {
    let m = &report.maintainability;
    out.push("## Maintainability Breakdown".to_string());
    out.push(String::new());
    out.push("| Category | Score | Max | Notes |".to_string());
    out.push("|----------|------:|----:|-------|".to_string());
    for c in &m.breakdown {
        out.push(format!(
            "| {} | {} | {} | {} |",
            c.category,
            c.score,
            c.max,
            escape_md(&c.notes.join(", "))
        ));
    }

    if !m.quick_wins.is_empty() {
        out.push(String::new());
        out.push("### Quick Wins".to_string());
        for win in &m.quick_wins {
            out.push(format!("- {win}"));
        }
    }
}

fn extreme_hotspots(out: &mut Vec<String>, report: &Report) {
    out.push(format!(
        "## Extreme Hotspots (Complexity >= {EXTREME_COMPLEXITY})"
    ));
    out.push(String::new());
    let extreme: Vec<_> = report
        .scan
        .hotspots
        .by_complexity
        .iter()
        .filter(|h| h.score >= EXTREME_COMPLEXITY)
        .collect();
    if extreme.is_empty() {
        out.push("_No extreme hotspots detected. Great job!_".to_string());
        return;
    }
    out.push("| File | Complexity |".to_string());
    out.push("|------|-----------:|".to_string());
    for h in extreme {
        out.push(format!("| {} | {:.1} |", escape_md(&h.path), h.score));
    }
}

fn top_files(out: &mut Vec<String>, report: &Report) {
    out.push("## Top Hotspots".to_string());
    out.push(String::new());
    out.push("| File | LOC | Complexity |".to_string());
    out.push("|------|----:|-----------:|".to_string());
    for h in report.scan.hotspots.by_loc.iter().take(TOP_ROWS) {
        let complexity = report
            .scan
            .files
            .iter()
            .find(|f| f.path == h.path)
            .map_or(0.0, |f| f.complexity);
        out.push(format!(
            "| {} | {} | {:.1} |",
            escape_md(&h.path),
            count(h.loc_code),
            complexity
        ));
    }
}

fn top_directories(out: &mut Vec<String>, report: &Report) {
    out.push("## Top Directories".to_string());
    out.push(String::new());
    out.push("| Directory | Files | Code |".to_string());
    out.push("|-----------|------:|-----:|".to_string());
    for d in report.scan.directories.iter().take(TOP_ROWS) {
        out.push(format!(
            "| {} | {} | {} |",
            escape_md(&d.path),
            d.files,
            count(d.loc.code)
        ));
    }
}

fn churn_hotspots(out: &mut Vec<String>, report: &Report) {
    let churn = &report.scan.hotspots.by_churn;
    if churn.is_empty() {
        return;
    }
    out.push(String::new());
    out.push("## Churn Hotspots".to_string());
    out.push(String::new());
    out.push("| File | Commits | Authors |".to_string());
    out.push("|------|--------:|--------:|".to_string());
    for h in churn.iter().take(TOP_ROWS) {
        out.push(format!(
            "| {} | {} | {} |",
            escape_md(&h.path),
            h.commits,
            h.authors
        ));
    }
}

fn languages(out: &mut Vec<String>, report: &Report) {
    out.push("## Language Breakdown".to_string());
    out.push(String::new());
    out.push("| Language | Files | Code | Comment | Blank | % |".to_string());
    out.push("|----------|------:|-----:|--------:|------:|--:|".to_string());
    for l in &report.scan.languages {
        out.push(format!(
            "| {} | {} | {} | {} | {} | {:.1}% |",
            l.name,
            l.files,
            count(l.loc.code),
            count(l.loc.comment),
            count(l.loc.blank),
            l.percent_of_code
        ));
    }
}

/// Render the markdown report. Every figure comes from `report`; nothing is
/// recomputed here.
pub fn render_markdown(report: &Report) -> String {
    let score = report.maintainability.score;
    let mut out = vec!["# Codeworth Report".to_string(), String::new()];

    summary(&mut out, report);
    out.push(String::new());
    out.push(format!(
        "## Maintainability: {} {score}%",
        score_bar(score as f64, BAR_WIDTH)
    ));
    out.push(String::new());
    metadata(&mut out, report);
    out.push(String::new());
    valuation(&mut out, report);
    out.push(String::new());
    breakdown(&mut out, report);
    out.push(String::new());
    extreme_hotspots(&mut out, report);
    out.push(String::new());
    top_files(&mut out, report);
    out.push(String::new());
    top_directories(&mut out, report);
    churn_hotspots(&mut out, report);
    out.push(String::new());
    languages(&mut out, report);

    let mut doc = out.join("\n");
    doc.push('\n');
    doc
}

pub fn write_markdown(report: &Report, outdir: &Path) -> Result<PathBuf> {
    let path = outdir.join(MD_REPORT);
    fs::write(&path, render_markdown(report)).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;
