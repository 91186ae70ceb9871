//! Error taxonomy for the extraction pipeline
//!
//! Only the I/O boundary can fail; extraction itself is total over any
//! parsed document.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors surfaced to the caller
#[derive(Debug, Error)]
pub enum ParserError {
    /// Input snapshot missing or unreadable
    #[error("failed to read input document {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file exists but does not match the expected shape
    #[error("settings file {path} is malformed: {source}")]
    Configuration {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Settings file could not be read or created
    #[error("failed to access settings file {path}: {source}")]
    ConfigurationIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
