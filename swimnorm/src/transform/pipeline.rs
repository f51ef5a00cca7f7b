//! High-level pipeline API: read an export, normalize it, write the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use swimnorm::{normalize_file, NormalizeOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = NormalizeOptions {
//!         description: "2021_22_SEC".to_string(),
//!         ..NormalizeOptions::default()
//!     };
//!     let result = normalize_file(Path::new("top_times.csv"), &options)?;
//!
//!     println!("Wrote {} rows to {}", result.records.len(), result.output_path.display());
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PipelineResult;
use crate::logs::{log_error, log_info, log_info_indent, log_success, log_warning};
use crate::models::OutputRecord;
use crate::output::write_formatted;
use crate::parser::{parse_bytes_auto, parse_file_auto, ParseResult};

use super::normalizer::normalize_records;

/// Description used when the caller does not name the output.
pub const DEFAULT_DESCRIPTION: &str = "MeetName";

/// Options for a normalization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Names the output file: `FORMATTED_<description>.csv`
    pub description: String,

    /// Directory the output file is written to
    pub output_dir: PathBuf,

    /// Input delimiter (auto-detect if not specified)
    pub delimiter: Option<char>,

    /// Whether the first input line is a header row to skip
    pub has_headers: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            output_dir: PathBuf::from("."),
            delimiter: None,
            has_headers: true,
        }
    }
}

/// Result of a file-level run
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeResult {
    /// Formatted records, in input order
    pub records: Vec<OutputRecord>,

    /// File the records were written to
    pub output_path: PathBuf,

    /// CSV parsing metadata
    pub csv_info: CsvInfo,
}

/// CSV file information
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Normalize positional rows and write `FORMATTED_<description>.csv`.
///
/// All-or-nothing: if any row fails, no file is written.
pub fn normalize(
    rows: Vec<Vec<String>>,
    options: &NormalizeOptions,
) -> PipelineResult<Vec<OutputRecord>> {
    let (records, _) = normalize_and_write(rows, options)?;
    Ok(records)
}

/// Read, normalize and write an export file.
pub fn normalize_file(path: &Path, options: &NormalizeOptions) -> PipelineResult<NormalizeResult> {
    log_info(format!("📖 Reading {}", path.display()));
    let parse_result = parse_file_auto(path, options.delimiter, options.has_headers)?;
    normalize_parsed(parse_result, options)
}

/// Same as [`normalize_file`] but accepts raw bytes instead of a file path.
pub fn normalize_bytes(bytes: &[u8], options: &NormalizeOptions) -> PipelineResult<NormalizeResult> {
    let parse_result = parse_bytes_auto(bytes, options.delimiter, options.has_headers)?;
    normalize_parsed(parse_result, options)
}

fn normalize_parsed(
    parse_result: ParseResult,
    options: &NormalizeOptions,
) -> PipelineResult<NormalizeResult> {
    log_success(format!("Detected encoding: {}", parse_result.encoding));
    log_success(format!(
        "Detected separator: '{}'",
        format_delimiter(parse_result.delimiter)
    ));
    log_success(format!("Read {} rows", parse_result.rows.len()));

    let csv_info = CsvInfo {
        encoding: parse_result.encoding,
        delimiter: parse_result.delimiter,
        headers: parse_result.headers,
        row_count: parse_result.rows.len(),
    };

    let (records, output_path) = normalize_and_write(parse_result.rows, options)?;

    Ok(NormalizeResult {
        records,
        output_path,
        csv_info,
    })
}

fn normalize_and_write(
    rows: Vec<Vec<String>>,
    options: &NormalizeOptions,
) -> PipelineResult<(Vec<OutputRecord>, PathBuf)> {
    if rows.is_empty() {
        log_warning("No data rows; writing header only");
    }

    log_info("⚙️  Normalizing rows...");
    let records = normalize_records(rows).inspect_err(|e| log_error(e.to_string()))?;
    log_success(format!("{} rows normalized", records.len()));

    let path = write_formatted(&options.output_dir, &options.description, &records)
        .inspect_err(|e| log_error(e.to_string()))?;
    log_info_indent(format!("💾 Saved to: {}", path.display()), 1);

    Ok((records, path))
}

/// Format delimiter for display
pub fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "TAB".to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::models::OUTPUT_COLUMNS;
    use crate::transform::normalizer::tests::sample_row;
    use tempfile::tempdir;

    fn options_in(dir: &Path, description: &str) -> NormalizeOptions {
        NormalizeOptions {
            description: description.to_string(),
            output_dir: dir.to_path_buf(),
            ..NormalizeOptions::default()
        }
    }

    fn to_csv_line(fields: &[String]) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(fields).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_default_options() {
        let opts = NormalizeOptions::default();
        assert_eq!(opts.description, "MeetName");
        assert_eq!(opts.output_dir, PathBuf::from("."));
        assert!(opts.delimiter.is_none());
        assert!(opts.has_headers);
    }

    #[test]
    fn test_options_from_partial_json() {
        let opts: NormalizeOptions = serde_json::from_str(r#"{"description": "SEC"}"#).unwrap();
        assert_eq!(opts.description, "SEC");
        assert!(opts.has_headers);
    }

    #[test]
    fn test_normalize_writes_named_file() {
        let dir = tempdir().unwrap();
        let records = normalize(vec![sample_row()], &options_in(dir.path(), "TEST")).unwrap();
        assert_eq!(records.len(), 1);

        let path = dir.path().join("FORMATTED_TEST.csv");
        let content = std::fs::read_to_string(path).unwrap();
        let header = content.lines().next().unwrap();
        let expected: Vec<&str> = std::iter::once("").chain(OUTPUT_COLUMNS).collect();
        assert_eq!(header, expected.join(","));
    }

    #[test]
    fn test_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut bad = sample_row();
        bad[3] = "100 Backstroke Finals".to_string();

        let err = normalize(vec![sample_row(), bad], &options_in(dir.path(), "BAD")).unwrap_err();
        assert!(matches!(err, PipelineError::Row(ref e) if e.row == 1));
        assert!(!dir.path().join("FORMATTED_BAD.csv").exists());
    }

    #[test]
    fn test_normalize_bytes_skips_header() {
        let dir = tempdir().unwrap();
        let header: Vec<String> = crate::models::RAW_SCHEMA.iter().map(|s| s.to_string()).collect();
        let input = format!("{}{}", to_csv_line(&header), to_csv_line(&sample_row()));

        let result = normalize_bytes(input.as_bytes(), &options_in(dir.path(), "SEC")).unwrap();

        assert_eq!(result.csv_info.row_count, 1);
        assert_eq!(result.csv_info.delimiter, ',');
        assert_eq!(result.csv_info.headers[0], "MeetName");
        assert_eq!(result.records[0].time_ss, 101.39);
        assert_eq!(result.records[0].first, " John");
        assert!(result.output_path.ends_with("FORMATTED_SEC.csv"));
    }

    #[test]
    fn test_normalize_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("top_times.csv");
        let header: Vec<String> = crate::models::RAW_SCHEMA.iter().map(|s| s.to_string()).collect();
        std::fs::write(&input, format!("{}{}", to_csv_line(&header), to_csv_line(&sample_row())))
            .unwrap();

        let result = normalize_file(&input, &options_in(dir.path(), "FILE")).unwrap();
        assert_eq!(result.records[0].stroke, "Back");
        assert!(dir.path().join("FORMATTED_FILE.csv").exists());
    }

    #[test]
    fn test_empty_input_file_is_error() {
        let dir = tempdir().unwrap();
        let err = normalize_bytes(b"", &options_in(dir.path(), "X")).unwrap_err();
        assert!(matches!(err, PipelineError::Csv(_)));
    }

    #[test]
    fn test_format_delimiter() {
        assert_eq!(format_delimiter('\t'), "TAB");
        assert_eq!(format_delimiter(';'), ";");
    }
}
