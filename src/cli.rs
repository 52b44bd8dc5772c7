/// Command-line definitions for `codeworth`.
///
/// Flags that also exist in `codeworth.toml` are `Option`s so an absent
/// flag can fall through to the config file and then to the default.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::badge::BadgeKind;
use crate::valuation::RatePreset;

#[derive(Parser)]
#[command(
    name = "codeworth",
    version,
    about = "Codebase valuation and maintainability tool"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and write JSON and Markdown reports
    Scan(ScanArgs),

    /// Generate a maintainability badge, or enforce a quality gate with --ci
    Badge(BadgeArgs),

    /// Write a default .codeworthignore in the current directory
    Init,

    /// Show version and platform information
    Version,

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to scan (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Directory to write reports into (default: ./reports)
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// Skip the JSON report
    #[arg(long)]
    pub no_json: bool,

    /// Skip the Markdown report
    #[arg(long)]
    pub no_md: bool,

    /// Number of files in each hotspot list (default: 20)
    #[arg(long)]
    pub top: Option<usize>,

    /// Disable git churn analysis
    #[arg(long)]
    pub no_git: bool,

    /// Base cost per line of code in USD (default: 10)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Rate preset; overrides --rate
    #[arg(long, value_enum)]
    pub preset: Option<RatePreset>,

    /// Glob patterns to exclude
    #[arg(long, num_args = 1..)]
    pub exclude: Vec<String>,

    /// Config file (default: <path>/codeworth.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct BadgeArgs {
    /// Directory to scan (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Output SVG file
    #[arg(long, default_value = "reports/codeworth.svg")]
    pub out: PathBuf,

    /// Report file to gate on in CI mode (default: auto-discovery)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Badge type
    #[arg(long = "type", value_enum, default_value_t = BadgeKind::Grade)]
    pub kind: BadgeKind,

    /// Run in CI mode: read a prior report and exit 1 unless the gate passes
    #[arg(long)]
    pub ci: bool,

    /// Minimum grade required (A+, A, B, C, D, F; default: C)
    #[arg(long)]
    pub min_grade: Option<String>,

    /// Minimum score required (0-100); takes precedence over --min-grade
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Config file (default: <path>/codeworth.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
