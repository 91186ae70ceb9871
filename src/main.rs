//! One-shot CLI: read the HTML snapshot, extract job rows, print them.
//!
//! Takes no arguments; the settings file and the input snapshot live at
//! fixed paths relative to the invoking process. Diagnostics go to
//! stderr, the extracted stream is the only thing written to stdout.

use std::fs;
use std::path::Path;

use scraper::Html;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use job_parser::config::{load_settings, SETTINGS_FILE};
use job_parser::error::ParserError;
use job_parser::extractors::{extract_job_rows, CellFilter};

/// HTML snapshot handed over by the fetch step of the pipeline
const INPUT_FILE: &str = "temp";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ParserError> {
    let settings = load_settings(Path::new(SETTINGS_FILE))?;

    let html = fs::read_to_string(INPUT_FILE).map_err(|source| ParserError::InputRead {
        path: INPUT_FILE.into(),
        source,
    })?;

    let document = Html::parse_document(&html);
    let result = extract_job_rows(&document, &settings.parser, &CellFilter::default());
    debug!("extracted {} bytes", result.len());

    println!("{result}");
    Ok(())
}
