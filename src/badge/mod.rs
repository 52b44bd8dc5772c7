//! Two-segment SVG badge: a label on dark grey, a value on a grade colour.

use std::fmt::Display;

use tracing::warn;

use crate::scan::ScanResult;
use crate::score::{Category, EXTREME_COMPLEXITY, MaintainabilityReport};
use crate::valuation::{Valuation, format_currency};

pub const DEFAULT_LABEL: &str = "Codeworth";
pub const NEUTRAL_COLOR: &str = "#737373";
pub const CERTIFIED_COLOR: &str = "#16a34a";

const HEIGHT: usize = 28;
/// Approximate glyph width at 11px.
const CHAR_WIDTH: usize = 7;
const PADDING: usize = 20;
const MIN_LABEL_WIDTH: usize = 60;
const MIN_VALUE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BadgeKind {
    /// Grade and score, e.g. "A (87)"
    #[default]
    Grade,
    /// Risk-adjusted value, e.g. "$12.5K"
    Value,
    /// "Certified" when the repository qualifies, else the grade
    Certified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub value: String,
    pub color: String,
}

pub fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A+" => "#16a34a",
        "A" => "#22c55e",
        "B" => "#14b8a6",
        "C" => "#f59e0b",
        "D" => "#ea580c",
        "F" => "#dc2626",
        _ => NEUTRAL_COLOR,
    }
}

pub fn grade_badge(grade: &str, score: impl Display) -> Badge {
    Badge {
        label: DEFAULT_LABEL.to_string(),
        value: format!("{grade} ({score})"),
        color: grade_color(grade).to_string(),
    }
}

/// Certified: score of at least 90, CI configured, some testing signal and
/// no file at or above the extreme complexity threshold.
pub fn is_certified(scan: &ScanResult, maintainability: &MaintainabilityReport) -> bool {
    maintainability.score >= 90
        && maintainability.has_note(Category::Hygiene, "CI")
        && maintainability.category_score(Category::Testing) > 0
        && !scan.files.iter().any(|f| f.complexity >= EXTREME_COMPLEXITY)
}

/// Badge of `kind` for a fresh scan. An ineligible certified badge falls
/// back to the grade badge.
pub fn build(
    kind: BadgeKind,
    scan: &ScanResult,
    maintainability: &MaintainabilityReport,
    valuation: &Valuation,
) -> Badge {
    let grade = maintainability.grade.as_str();
    match kind {
        BadgeKind::Grade => grade_badge(grade, maintainability.score),
        BadgeKind::Value => Badge {
            label: "Value".to_string(),
            value: format_currency(valuation.risk_adjusted_value),
            color: grade_color(grade).to_string(),
        },
        BadgeKind::Certified if is_certified(scan, maintainability) => Badge {
            label: DEFAULT_LABEL.to_string(),
            value: "Certified".to_string(),
            color: CERTIFIED_COLOR.to_string(),
        },
        BadgeKind::Certified => {
            warn!("repository not eligible for the certified badge, falling back to grade");
            grade_badge(grade, maintainability.score)
        }
    }
}

fn segment_width(text: &str, min: usize) -> usize {
    min.max(text.chars().count() * CHAR_WIDTH + PADDING)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_svg(badge: &Badge) -> String {
    let label_width = segment_width(&badge.label, MIN_LABEL_WIDTH);
    let value_width = segment_width(&badge.value, MIN_VALUE_WIDTH);
    let total = label_width + value_width;
    let label_x = label_width as f64 / 2.0;
    let value_x = label_width as f64 + value_width as f64 / 2.0;
    let color = escape_xml(&badge.color);
    let label = escape_xml(&badge.label);
    let value = escape_xml(&badge.value);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{total}" height="{HEIGHT}" viewBox="0 0 {total} {HEIGHT}">
  <defs>
    <style>
      .text {{ font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; }}
      .label {{ font-weight: 600; fill: #fff; }}
      .value {{ font-weight: 700; fill: #fff; }}
    </style>
  </defs>
  <mask id="m">
    <rect width="{total}" height="{HEIGHT}" rx="6" fill="#fff"/>
  </mask>
  <g mask="url(#m)">
    <rect x="0" y="0" width="{label_width}" height="{HEIGHT}" fill="#333"/>
    <rect x="{label_width}" y="0" width="{value_width}" height="{HEIGHT}" fill="{color}"/>
    <rect x="{label_width}" y="4" width="1" height="20" fill="#fff" fill-opacity="0.1"/>
    <rect x="0" y="0" width="{total}" height="1" fill="#fff" fill-opacity="0.1"/>
  </g>
  <g text-anchor="middle" dominant-baseline="middle" class="text">
    <text x="{label_x}" y="15" class="label" font-size="11">{label}</text>
    <text x="{value_x}" y="15" class="value" font-size="11">{value}</text>
  </g>
</svg>
"##
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
