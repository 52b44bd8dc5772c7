//! Optional `codeworth.toml` settings. Command-line flags override every
//! value here, and anything left unset falls back to the built-in default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::valuation::RatePreset;

pub const CONFIG_FILE: &str = "codeworth.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub valuation: ValuationConfig,
    pub ci: CiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub outdir: Option<PathBuf>,
    pub top: Option<usize>,
    /// `false` disables churn even when `.git` is present.
    pub git: Option<bool>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    pub rate: Option<f64>,
    pub preset: Option<RatePreset>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    pub min_grade: Option<String>,
    pub min_score: Option<f64>,
}

/// Parse a config document. `path` is only used for error messages.
pub fn parse(text: &str, path: &Path) -> Result<Config> {
    toml::from_str(text).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `explicit` if given, else `<root>/codeworth.toml`. Only the implicit
/// file may be missing; a missing explicit file is an error.
pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => root.join(CONFIG_FILE),
    };
    match fs::read_to_string(&path) {
        Ok(text) => {
            debug!(path = %path.display(), "loaded config");
            parse(&text, &path)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            Ok(Config::default())
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
