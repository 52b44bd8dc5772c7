//! Rebuild cost and risk-adjusted value of a scanned codebase.
//!
//! rebuildCost = codeLoc × rate × mComplexity, where mComplexity runs from
//! 0.80 (complexity category at 0) to 1.15 (category at 25). Complex code is
//! discounted, not charged a premium. The risk-adjusted value applies the
//! tests, docs, churn and dependency multipliers on top and subtracts half
//! the nominal value of config lines beyond 30% of the code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scan::ScanResult;
use crate::score::{Category, MaintainabilityReport};

pub const DEFAULT_RATE: f64 = 10.0;

const RATE_MODEL: &str = "per_loc";

/// Share of code lines that JSON/YAML may take before being discounted.
const CONFIG_SHARE_LIMIT: f64 = 0.3;
const CONFIG_DISCOUNT: f64 = 0.5;
const CONFIG_LANGUAGES: &[&str] = &["JSON", "YAML"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RatePreset {
    Junior,
    Senior,
    Agency,
}

impl RatePreset {
    pub fn rate(self) -> f64 {
        match self {
            Self::Junior => 6.0,
            Self::Senior => 12.0,
            Self::Agency => 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationOptions {
    pub loc_rate_usd: f64,
}

impl Default for ValuationOptions {
    fn default() -> Self {
        Self {
            loc_rate_usd: DEFAULT_RATE,
        }
    }
}

impl ValuationOptions {
    /// A preset overrides an explicit rate.
    pub fn new(rate: Option<f64>, preset: Option<RatePreset>) -> Self {
        let loc_rate_usd = preset
            .map(RatePreset::rate)
            .or(rate)
            .unwrap_or(DEFAULT_RATE);
        Self { loc_rate_usd }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    fn from_points(points: i32) -> Self {
        if points >= 6 {
            Self::High
        } else if points >= 3 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    pub complexity: f64,
    pub tests: f64,
    pub docs: f64,
    pub churn: f64,
    pub deps: f64,
}

impl Multipliers {
    /// Product of the four risk multipliers (complexity excluded).
    pub fn risk(&self) -> f64 {
        self.tests * self.docs * self.churn * self.deps
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    pub rate_model: String,
    pub loc_rate_usd: f64,
    pub multipliers: Multipliers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub rebuild_cost: i64,
    pub risk_adjusted_value: i64,
    pub confidence: Confidence,
    pub assumptions: Assumptions,
}

pub fn complexity_multiplier(complexity_score: u32) -> f64 {
    0.80 + (complexity_score as f64 / 25.0) * 0.35
}

pub fn tests_multiplier(testing_score: u32) -> f64 {
    match testing_score {
        s if s >= 15 => 1.10,
        s if s >= 8 => 1.00,
        s if s >= 1 => 0.90,
        _ => 0.80,
    }
}

pub fn deps_multiplier(dependency_score: u32) -> f64 {
    match dependency_score {
        s if s >= 8 => 1.05,
        s if s >= 5 => 1.00,
        _ => 0.90,
    }
}

pub fn calculate(
    scan: &ScanResult,
    maintainability: &MaintainabilityReport,
    options: &ValuationOptions,
) -> Valuation {
    let rate = options.loc_rate_usd;
    let code = scan.totals.loc.code as f64;

    let testing = maintainability.category_score(Category::Testing);
    let dependencies = maintainability.category_score(Category::Dependencies);
    let has_readme = maintainability.has_note(Category::Hygiene, "README");
    let has_ci = maintainability.has_note(Category::Hygiene, "CI");

    let multipliers = Multipliers {
        complexity: complexity_multiplier(maintainability.category_score(Category::Complexity)),
        tests: tests_multiplier(testing),
        docs: if has_readme { 1.00 } else { 0.90 },
        churn: if scan.has_churn() { 1.05 } else { 1.00 },
        deps: deps_multiplier(dependencies),
    };

    let rebuild_cost = code * rate * multipliers.complexity;
    let mut risk_adjusted = rebuild_cost * multipliers.risk();

    let config: usize = CONFIG_LANGUAGES
        .iter()
        .filter_map(|name| scan.language(name))
        .map(|l| l.loc.code)
        .sum();
    let config = config as f64;
    if config > code * CONFIG_SHARE_LIMIT {
        let excess = config - code * CONFIG_SHARE_LIMIT;
        risk_adjusted -= excess * rate * multipliers.complexity * CONFIG_DISCOUNT;
    }

    let mut points = 0;
    if scan.meta.repo.has_git {
        points += 2;
    }
    if testing > 5 {
        points += 2;
    }
    if has_ci {
        points += 1;
    }
    if scan.totals.files > 5 {
        points += 1;
    }
    if dependencies >= 5 {
        points += 1;
    }
    if scan.totals.loc.code < 100 {
        points -= 5;
    }

    Valuation {
        rebuild_cost: rebuild_cost.round() as i64,
        risk_adjusted_value: risk_adjusted.round() as i64,
        confidence: Confidence::from_points(points),
        assumptions: Assumptions {
            rate_model: RATE_MODEL.to_string(),
            loc_rate_usd: rate,
            multipliers,
        },
    }
}

fn trim_point_zero(s: String) -> String {
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

/// Short dollar figure: `$999`, `$1K`, `$12.5K`, `$1.5M`.
pub fn format_currency(value: i64) -> String {
    if value < 1_000 {
        format!("${value}")
    } else if value < 1_000_000 {
        format!("${}K", trim_point_zero(format!("{:.1}", value as f64 / 1_000.0)))
    } else {
        format!("${}M", trim_point_zero(format!("{:.1}", value as f64 / 1_000_000.0)))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
