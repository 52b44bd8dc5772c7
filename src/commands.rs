//! Subcommand entry points. Each resolves its settings from flags and
//! `codeworth.toml`, runs the pipeline and prints the user-facing result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::{debug, info};

use crate::badge::{self, Badge};
use crate::ci::{self, CiOptions};
use crate::cli::{BadgeArgs, Cli, ScanArgs};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::git::{self, ChurnSource, GitChurn};
use crate::report::{self, Outputs, Report};
use crate::report_helpers::{format_thousands, separator};
use crate::scan::{self, DEFAULT_TOP, ScanOptions};
use crate::score;
use crate::valuation::{self, ValuationOptions, format_currency};
use crate::walk::{IGNORE_FILE, WalkDiscoverer};

pub const DEFAULT_OUTDIR: &str = "reports";

pub const DEFAULT_IGNORE_CONTENT: &str = "# Codeworth Ignore List
node_modules
dist
build
coverage
reports
.next
.vercel
.git
";

const SUMMARY_WIDTH: usize = 40;
/// Minimum score for suggesting the badge in a README.
const SHARE_SCORE: u32 = 50;

/// Effective scan settings after merging flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub root: PathBuf,
    pub outdir: PathBuf,
    pub outputs: Outputs,
    pub use_git: bool,
    pub scan: ScanOptions,
    pub valuation: ValuationOptions,
}

impl ScanSettings {
    /// A flag beats the config file. An outdir from the config file is
    /// relative to the scanned root, a flag's to the working directory.
    pub fn resolve(args: &ScanArgs, config: &Config) -> Self {
        let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
        let outdir = match (&args.outdir, &config.scan.outdir) {
            (Some(flag), _) => flag.clone(),
            (None, Some(configured)) => root.join(configured),
            (None, None) => PathBuf::from(DEFAULT_OUTDIR),
        };

        let mut excludes = config.scan.exclude.clone();
        excludes.extend(args.exclude.iter().cloned());

        Self {
            outputs: Outputs {
                json: !args.no_json,
                markdown: !args.no_md,
            },
            use_git: !args.no_git && config.scan.git.unwrap_or(true),
            scan: ScanOptions {
                excludes,
                top: args.top.or(config.scan.top).unwrap_or(DEFAULT_TOP),
            },
            valuation: valuation_options(args.rate, args.preset, config),
            root,
            outdir,
        }
    }
}

/// Rate flags replace the config's rate settings as a pair, so a `--rate`
/// is never overridden by a configured preset.
fn valuation_options(
    rate: Option<f64>,
    preset: Option<valuation::RatePreset>,
    config: &Config,
) -> ValuationOptions {
    if rate.is_some() || preset.is_some() {
        ValuationOptions::new(rate, preset)
    } else {
        ValuationOptions::new(config.valuation.rate, config.valuation.preset)
    }
}

/// Gate thresholds: flags replace configured thresholds as a pair.
fn ci_options(args: &BadgeArgs, config: &Config) -> CiOptions {
    if args.min_grade.is_some() || args.min_score.is_some() {
        CiOptions {
            min_grade: args.min_grade.clone(),
            min_score: args.min_score,
        }
    } else {
        CiOptions {
            min_grade: config.ci.min_grade.clone(),
            min_score: config.ci.min_score,
        }
    }
}

/// Scan, score and value `settings.root`.
pub fn build_report(settings: &ScanSettings) -> Result<Report> {
    let discoverer = WalkDiscoverer::new(Some(settings.outdir.clone()));
    let churn = if settings.use_git && git::has_git(&settings.root) {
        let churn = GitChurn::open_or_empty(&settings.root);
        info!(paths = churn.tracked_paths(), "indexed git history");
        Some(churn)
    } else {
        None
    };
    let source = churn.as_ref().map(|c| c as &dyn ChurnSource);

    let scan = scan::scan(&settings.root, &discoverer, source, &settings.scan)?;
    let maintainability = score::calculate(&scan, &settings.root);
    let valuation = valuation::calculate(&scan, &maintainability, &settings.valuation);
    Ok(Report {
        scan,
        maintainability,
        valuation,
    })
}

pub fn scan(args: &ScanArgs) -> Result<()> {
    let start = Instant::now();
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = config::load(&root, args.config.as_deref())?;
    let settings = ScanSettings::resolve(args, &config);
    debug!(?settings, "resolved scan settings");

    println!("Scanning {}...", settings.root.display());
    let report = build_report(&settings)?;
    println!("Found {} files.", report.scan.totals.files);

    let written = report::write_all(&report, &settings.outdir, settings.outputs)?;
    for path in &written {
        let kind = if path.extension().is_some_and(|e| e == "json") {
            "JSON"
        } else {
            "Markdown"
        };
        println!("{kind} report written to {}", path.display());
    }

    print_summary(&report);
    println!("Scan completed in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn print_summary(report: &Report) {
    let m = &report.maintainability;
    let v = &report.valuation;
    println!("{}", separator(SUMMARY_WIDTH));
    println!(" Grade:               {} ({}/100)", m.grade, m.score);
    println!(" Rebuild cost:        ${}", format_thousands(v.rebuild_cost));
    println!(
        " Risk-adjusted value: ${} ({} confidence)",
        format_thousands(v.risk_adjusted_value),
        v.confidence
    );
    println!("{}", separator(SUMMARY_WIDTH));
}

fn write_badge(out: &Path, badge: &Badge) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(out, badge::render_svg(badge)).map_err(|e| Error::io(out, e))
}

/// Returns `Ok(false)` only when the CI gate ran and failed.
pub fn badge(args: &BadgeArgs) -> Result<bool> {
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = config::load(&root, args.config.as_deref())?;
    if args.ci {
        return gate(args, &root, &config);
    }

    let scan_options = ScanOptions {
        excludes: config.scan.exclude.clone(),
        top: config.scan.top.unwrap_or(DEFAULT_TOP),
    };
    let scan = scan::scan(&root, &WalkDiscoverer::default(), None, &scan_options)?;
    let maintainability = score::calculate(&scan, &root);
    let options = valuation_options(None, None, &config);
    let value = valuation::calculate(&scan, &maintainability, &options);
    debug!(value = %format_currency(value.risk_adjusted_value), "valued repository");

    let badge = badge::build(args.kind, &scan, &maintainability, &value);
    write_badge(&args.out, &badge)?;
    println!("Badge written to {}", args.out.display());

    if maintainability.score >= SHARE_SCORE {
        println!();
        println!("Share your score: Add this to your README.");
        println!();
        println!(
            "[![Codeworth]({})](https://github.com/<user>/<repo>)",
            share_path(&root, &args.out)
        );
    } else {
        println!();
        println!("Tip: Improve maintainability to earn a sharable badge.");
    }
    Ok(true)
}

fn gate(args: &BadgeArgs, root: &Path, config: &Config) -> Result<bool> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    let (path, prior) = ci::locate_report(args.report.as_deref(), root, &cwd)?;
    info!(report = %path.display(), "evaluating CI gate");

    let result = ci::evaluate(&prior, &ci_options(args, config));
    let badge = badge::grade_badge(&result.grade, result.score);
    if result.passed {
        println!("✅ Codeworth CI PASSED");
        println!("Grade: {} ({})", result.grade, result.score);
        println!("Requirement: {}", result.message);
    } else {
        println!("❌ Codeworth CI FAILED");
        println!("Grade: {} ({})", result.grade, result.score);
        println!("Required: {}", result.message);
    }
    write_badge(&args.out, &badge)?;
    Ok(result.passed)
}

/// Badge path as seen from the scanned root, `/`-separated.
pub fn share_path(root: &Path, out: &Path) -> String {
    let absolute = |p: &Path| std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf());
    let out_abs = absolute(out);
    let rel = out_abs
        .strip_prefix(absolute(root))
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| out_abs.clone());
    crate::util::to_slash(&rel)
}

/// Write the default ignore file into `dir`. Returns `false` if one exists.
pub fn write_ignore_file(dir: &Path) -> Result<bool> {
    let path = dir.join(IGNORE_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, DEFAULT_IGNORE_CONTENT).map_err(|e| Error::io(&path, e))?;
    Ok(true)
}

pub fn init(dir: &Path) -> Result<()> {
    if write_ignore_file(dir)? {
        println!("Created {IGNORE_FILE}");
    } else {
        println!("{IGNORE_FILE} already exists.");
    }
    Ok(())
}

pub fn version() {
    println!("Codeworth CLI");
    println!("Version:     {}", env!("CARGO_PKG_VERSION"));
    println!("OS:          {}", std::env::consts::OS);
    println!("Arch:        {}", std::env::consts::ARCH);
}

pub fn completions(shell: Shell) {
    clap_complete::generate(shell, &mut Cli::command(), "codeworth", &mut io::stdout());
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
