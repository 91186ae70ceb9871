//! Job table row extraction
//!
//! Uses the scraper crate to walk every table row in the document, keep
//! the rows whose id marks them as job rows, and serialize the filtered
//! cell values into one delimiter-joined string.

use scraper::{Html, Selector};

use super::CellFilter;
use crate::config::ParserSettings;

/// Substring identifying a job row's id attribute
const JOB_ROW_MARKER: &str = "job_";

/// Extract job rows from a parsed document
///
/// Records appear in document order. Each record starts with the row's
/// full id attribute; kept cell values follow, each preceded by the
/// field separator. Records are joined by the record separator, with
/// nothing leading or trailing. A document without job rows yields the
/// empty string.
pub fn extract_job_rows(
    document: &Html,
    settings: &ParserSettings,
    filter: &CellFilter,
) -> String {
    let rows = match Selector::parse("tr") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };
    let cells = match Selector::parse("td") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    let mut result = String::new();

    for row in document.select(&rows) {
        let id = match row.value().attr("id") {
            Some(id) if id.contains(JOB_ROW_MARKER) => id,
            _ => continue,
        };

        if !result.is_empty() {
            result.push_str(&settings.end_of_row);
        }
        result.push_str(id);

        for cell in row.select(&cells) {
            let data = match cell.value().attr("data") {
                Some(d) => d,
                None => continue,
            };
            // Placeholder wins over the marker test: the dash itself is
            // never emitted, only the separator that marks its slot.
            if data == filter.placeholder {
                result.push_str(&settings.separator);
            } else if data.contains(&filter.period_marker) {
                result.push_str(&settings.separator);
                result.push_str(data);
            }
        }
    }

    result
}

/// Parse `html` and extract job rows in one call
pub fn extract_job_rows_html(html: &str, settings: &ParserSettings, filter: &CellFilter) -> String {
    let document = Html::parse_document(html);
    extract_job_rows(&document, settings, filter)
}
