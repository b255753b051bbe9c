//! Run settings loaded from a JSON file.

use crate::tabu::TabuConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised while loading a settings file.
#[derive(Debug)]
pub enum SettingsError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid settings JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings file: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Top-level settings for a solver invocation.
///
/// Only `data_file` is required; everything else falls back to defaults.
///
/// # Examples
///
/// ```
/// use tsp_tabu::io::Settings;
///
/// let settings: Settings = serde_json::from_str(r#"{
///     "data_file": "instances/ftv47.txt",
///     "repeats": 5,
///     "solver": { "neighborhood": "pairwise_exchange" }
/// }"#).expect("valid");
/// assert_eq!(settings.repeats, 5);
/// assert!(settings.output_file.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Instance file to solve.
    pub data_file: PathBuf,
    /// Results file for the TSV summary, if any.
    #[serde(default)]
    pub output_file: Option<PathBuf>,
    /// Number of independent trials.
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Solver configuration.
    #[serde(default)]
    pub solver: TabuConfig,
}

fn default_repeats() -> usize {
    1
}

/// Loads settings from a JSON file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}
