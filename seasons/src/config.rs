//! Scan configuration file support.
//!
//! This module provides utilities for reading scan settings from TOML
//! configuration files.
//!
//! ```toml
//! [scan]
//! start_jd = 2460310.5
//! end_jd = 2460676.5
//! step_days = 1.0
//! high_precision = true
//!
//! [output]
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{SeasonsError, SeasonsResult};
use crate::services::ScanRequest;

/// Scan configuration from file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub scan: ScanSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Range and sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSettings {
    pub start_jd: f64,
    pub end_jd: f64,
    #[serde(default = "default_step_days")]
    pub step_days: f64,
    #[serde(default = "default_high_precision")]
    pub high_precision: bool,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How events are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

fn default_step_days() -> f64 {
    1.0
}

fn default_high_precision() -> bool {
    true
}

impl ScanConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> SeasonsResult<Self> {
        toml::from_str(content).map_err(|e| {
            SeasonsError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load scan configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ScanConfig)` if successful
    /// * `Err(SeasonsError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> SeasonsResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SeasonsError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load scan configuration from the default location.
    ///
    /// Searches for `seasons.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> SeasonsResult<Self> {
        let search_paths = [
            PathBuf::from("seasons.toml"),
            PathBuf::from("config/seasons.toml"),
            PathBuf::from("../seasons.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                log::debug!("Using configuration from {}", path.display());
                return Self::from_file(path);
            }
        }

        Err(SeasonsError::configuration(
            "No seasons.toml found in standard locations",
        ))
    }

    /// Validate the `[scan]` section into a request.
    pub fn to_request(&self) -> SeasonsResult<ScanRequest> {
        ScanRequest::new(
            self.scan.start_jd,
            self.scan.end_jd,
            self.scan.step_days,
            self.scan.high_precision,
        )
    }
}
