//! HTML extraction modules
//!
//! Row extraction walks the document's table rows and serializes the
//! cells that pass the value filter.

mod job_extractor;

pub use job_extractor::*;

use serde::{Deserialize, Serialize};

/// Cell value filter applied while building a record
///
/// A cell is kept when its `data` attribute equals `placeholder` or
/// contains `period_marker`. The placeholder marks a relevant cell with
/// no real value and is serialized as an empty field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellFilter {
    /// Substring identifying values from the current reporting period
    pub period_marker: String,
    /// Exact value standing in for "relevant but empty"
    pub placeholder: String,
}

impl Default for CellFilter {
    fn default() -> Self {
        Self {
            period_marker: "2022".to_string(),
            placeholder: "-".to_string(),
        }
    }
}
