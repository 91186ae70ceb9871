//! Settings loading with first-run defaults
//!
//! The settings file mirrors the appsettings layout used by the rest of
//! the pipeline: a top-level `parser` object holding the two separator
//! strings. The file is created with defaults the first time the tool
//! runs and read verbatim on every run after that.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ParserError;

/// Location of the settings file, relative to the invoking process
pub const SETTINGS_FILE: &str = "appsettings.json";

/// Field separator written on first run
pub const DEFAULT_SEPARATOR: &str = "<SEP>";

/// Record separator written on first run
pub const DEFAULT_END_OF_ROW: &str = "<EOR>";

/// Complete settings file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub parser: ParserSettings,
}

/// Separator pair used when serializing extracted rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSettings {
    /// Joins fields within one record
    pub separator: String,
    /// Joins records in the final output
    #[serde(rename = "endOfRow")]
    pub end_of_row: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parser: ParserSettings {
                separator: DEFAULT_SEPARATOR.to_string(),
                end_of_row: DEFAULT_END_OF_ROW.to_string(),
            },
        }
    }
}

/// Load settings from `path`, creating the file with defaults on first run.
///
/// An existing but malformed file is an error; defaults are never
/// substituted once a settings file is present.
pub fn load_settings(path: &Path) -> Result<Settings, ParserError> {
    if !path.exists() {
        let defaults = Settings::default();
        let json = serde_json::to_string_pretty(&defaults).map_err(|source| {
            ParserError::Configuration {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, json).map_err(|source| ParserError::ConfigurationIo {
            path: path.to_path_buf(),
            source,
        })?;
        info!("created default settings at {}", path.display());
        return Ok(defaults);
    }

    let content = fs::read_to_string(path).map_err(|source| ParserError::ConfigurationIo {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ParserError::Configuration {
        path: path.to_path_buf(),
        source,
    })
}
