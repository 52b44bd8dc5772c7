use std::fs;
use std::path::{Path, PathBuf};

use super::{JSON_REPORT, Report};
use crate::error::{Error, Result};

/// Write the pretty-printed report to `outdir/codeworth.report.json`.
pub fn write_json(report: &Report, outdir: &Path) -> Result<PathBuf> {
    let path = outdir.join(JSON_REPORT);
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}
