//! Run configuration.
//!
//! One [`Config`] is built at startup and passed by reference to every
//! component; nothing reads ambient globals. Values come from built-in
//! defaults, optionally overlaid by a TOML file, then by command-line flags
//! (applied by the frontend before calling [`Config::validate`]).
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default log root, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = ".snakemake/slurm_logs/";

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory searched for log files.
    pub log_dir: PathBuf,
    /// Number of most-recent event timestamps kept for the rate window.
    pub window_size: usize,
    /// Minimum wall-clock spacing between status lines.
    pub report_interval_seconds: f64,
    /// Units contributed by each input line.
    pub unit_size: f64,
    /// Maximum rows printed by the listing.
    pub max_files_listed: usize,
    /// Keep streaming the newest file instead of printing its tail once.
    pub follow: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            window_size: 10,
            report_interval_seconds: 1.0,
            unit_size: 1.0,
            max_files_listed: 10,
            follow: false,
        }
    }
}

impl Config {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        Self::from_toml_str(&contents).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Defaults, or the contents of `path` when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                tracing::debug!("Loading configuration from {}", p.display());
                Self::from_file(p)
            }
            None => Ok(Self::default()),
        }
    }

    /// Reject values outside their documented ranges.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidConfig("window_size must be at least 1".into()));
        }
        if !(self.report_interval_seconds.is_finite() && self.report_interval_seconds > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "report_interval_seconds must be a positive number, got {}",
                self.report_interval_seconds
            )));
        }
        if !(self.unit_size.is_finite() && self.unit_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "unit_size must be a positive number, got {}",
                self.unit_size
            )));
        }
        if self.max_files_listed == 0 {
            return Err(Error::InvalidConfig(
                "max_files_listed must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
