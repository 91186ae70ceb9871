//! Job table extraction for HTML snapshots
//!
//! Turns a saved HTML page containing job tables into a flat,
//! delimiter-based text stream:
//! - Row selection by id attribute
//! - Cell filtering by reporting-period marker
//! - Configurable field and record separators (appsettings.json)

pub mod config;
pub mod error;
pub mod extractors;

pub use config::*;
pub use error::*;
pub use extractors::*;
