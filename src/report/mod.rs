//! Scan report and its two on-disk renderings.
//!
//! A [`Report`] is the scan result with maintainability and valuation
//! attached; the JSON writer serializes it as-is and the markdown writer is
//! a pure view over it.

mod json;
mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::scan::ScanResult;
use crate::score::MaintainabilityReport;
use crate::valuation::Valuation;

pub use json::write_json;
pub use markdown::write_markdown;

pub const JSON_REPORT: &str = "codeworth.report.json";
pub const MD_REPORT: &str = "codeworth.report.md";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub scan: ScanResult,
    pub maintainability: MaintainabilityReport,
    pub valuation: Valuation,
}

/// Which artifacts a scan writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outputs {
    pub json: bool,
    pub markdown: bool,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            json: true,
            markdown: true,
        }
    }
}

/// Create `outdir` and write the requested artifacts into it, returning the
/// written paths in JSON, markdown order.
pub fn write_all(report: &Report, outdir: &Path, outputs: Outputs) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(outdir).map_err(|e| Error::io(outdir, e))?;
    let mut written = Vec::new();
    if outputs.json {
        written.push(write_json(report, outdir)?);
    }
    if outputs.markdown {
        written.push(write_markdown(report, outdir)?);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
