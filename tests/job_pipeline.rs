//! End-to-end pipeline tests: settings file on disk, full HTML page in,
//! delimited stream out.

use std::fs;

use job_parser::config::load_settings;
use job_parser::extractors::{extract_job_rows_html, CellFilter};
use tempfile::TempDir;

const PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Open positions</title></head>
<body>
    <h1>Listings</h1>
    <table>
        <tr id="header"><th>Posted</th><th>Closes</th></tr>
        <tr id="job_1">
            <td data="2022-01-01">2022-01-01</td>
            <td data="x">internal note</td>
            <td data="-"></td>
        </tr>
        <tr>
            <td data="2022-09-09">row without id</td>
        </tr>
    </table>
</body>
</html>
"#;

#[test]
fn extracts_with_freshly_created_default_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appsettings.json");

    let settings = load_settings(&path).unwrap();
    let result = extract_job_rows_html(PAGE, &settings.parser, &CellFilter::default());

    assert_eq!(result, "job_1<SEP>2022-01-01<SEP>");
}

#[test]
fn extracts_with_settings_read_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appsettings.json");
    fs::write(&path, r#"{"parser": {"separator": "\t", "endOfRow": "\n"}}"#).unwrap();

    let page = r#"
    <table>
        <tr id="job_1"><td data="2022-02-02">a</td></tr>
        <tr id="job_2"><td data="-">b</td></tr>
    </table>
    "#;

    let settings = load_settings(&path).unwrap();
    let result = extract_job_rows_html(page, &settings.parser, &CellFilter::default());

    assert_eq!(result, "job_1\t2022-02-02\njob_2\t");
}

#[test]
fn record_separator_count_matches_row_count() {
    let page = r#"
    <table>
        <tr id="job_1"><td data="2022-01-01">a</td></tr>
        <tr id="job_2"><td data="2022-01-02">b</td></tr>
        <tr id="job_3"><td data="2022-01-03">c</td></tr>
    </table>
    "#;

    let dir = TempDir::new().unwrap();
    let settings = load_settings(&dir.path().join("appsettings.json")).unwrap();
    let result = extract_job_rows_html(page, &settings.parser, &CellFilter::default());

    assert_eq!(result.matches("<EOR>").count(), 2);
    assert!(!result.starts_with("<EOR>"));
    assert!(!result.ends_with("<EOR>"));
}
