//! Raw export reader with encoding and delimiter auto-detection.
//!
//! Produces positional text rows. Nothing here knows the column meanings;
//! binding to the raw schema happens in the normalizer.

use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// Result of reading an export, with ingest metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Data rows as positional text fields
    pub rows: Vec<Vec<String>>,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
    /// Header row as found in the file (empty when headers are disabled)
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is always reported as `utf-8`; chardet only guesses for
/// bytes that are not.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// A leading byte-order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match String::from_utf8(bytes.to_vec()) {
            Ok(s) => s,
            Err(_) => String::from_utf8_lossy(bytes).to_string(),
        },
        // WHATWG maps the latin-1 labels onto windows-1252
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()
        }
        other => {
            let codec = encoding_rs::Encoding::for_label(other.as_bytes()).ok_or_else(|| {
                CsvError::EncodingError {
                    encoding: other.to_string(),
                    message: "unsupported encoding label".to_string(),
                }
            })?;
            codec.decode(bytes).0.to_string()
        }
    };

    Ok(decoded.trim_start_matches('\u{feff}').to_string())
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse decoded CSV text with an explicit delimiter.
///
/// Rows may have any width; blank lines are skipped. When `has_headers` is
/// set the first record is returned in [`ParseResult::headers`] and never
/// appears in the data rows.
pub fn parse_with_delimiter(
    content: &str,
    delimiter: char,
    has_headers: bool,
    encoding: String,
) -> CsvResult<ParseResult> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let delimiter_byte = u8::try_from(delimiter).map_err(|_| CsvError::ParseError {
        line: 0,
        message: format!("delimiter '{}' is not a single-byte character", delimiter),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();
    let mut headers = Vec::new();

    if has_headers {
        if let Some(header) = records.next() {
            headers = header?.iter().map(str::to_string).collect();
        }
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(ParseResult {
        rows,
        encoding,
        delimiter,
        headers,
    })
}

/// Parse export bytes, detecting the encoding and, unless given, the delimiter.
pub fn parse_bytes_auto(
    bytes: &[u8],
    delimiter: Option<char>,
    has_headers: bool,
) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    // Detect encoding
    let encoding = detect_encoding(bytes);

    // Decode content
    let content = decode_content(bytes, &encoding)?;

    // Detect delimiter
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    parse_with_delimiter(&content, delimiter, has_headers, encoding)
}

/// Parse an export file with auto-detection.
///
/// # Example
/// ```ignore
/// let result = parse_file_auto("top_times.csv", None, true)?;
/// println!("Encoding: {}, Delimiter: '{}'", result.encoding, result.delimiter);
/// println!("Rows: {}", result.rows.len());
/// ```
pub fn parse_file_auto<P: AsRef<Path>>(
    path: P,
    delimiter: Option<char>,
    has_headers: bool,
) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes, delimiter, has_headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_skipped() {
        let csv = "a,b,c\n1,2,3\n4,5,6";
        let result = parse_with_delimiter(csv, ',', true, "utf-8".into()).unwrap();

        assert_eq!(result.headers, vec!["a", "b", "c"]);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_headers_keeps_first_row() {
        let csv = "1,2,3\n4,5,6";
        let result = parse_with_delimiter(csv, ',', false, "utf-8".into()).unwrap();

        assert!(result.headers.is_empty());
        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn test_headerless_file_keeps_first_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("headerless.csv");
        std::fs::write(&path, "SEC 2022,=\"1:41.39\"\nSEC 2022,=\"41.39\"\n").unwrap();

        let result = parse_file_auto(&path, None, false).unwrap();
        assert!(result.headers.is_empty());
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0][0], "SEC 2022");

        let with_header = parse_file_auto(&path, None, true).unwrap();
        assert_eq!(with_header.rows.len(), 1);
    }

    #[test]
    fn test_export_artifacts_survive_reading() {
        let csv = "Time,Name\n=\"1:41.39\",\"Smith, John\"";
        let result = parse_with_delimiter(csv, ',', true, "utf-8".into()).unwrap();

        assert_eq!(result.rows[0][0], "=\"1:41.39\"");
        assert_eq!(result.rows[0][1], "Smith, John");
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let csv = "a,b,c\n1,2\n1,2,3,4";
        let result = parse_with_delimiter(csv, ',', true, "utf-8".into()).unwrap();

        assert_eq!(result.rows[0].len(), 2);
        assert_eq!(result.rows[1].len(), 4);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let csv = "a,b\n1,2\n\n3,4\n";
        let result = parse_with_delimiter(csv, ',', true, "utf-8".into()).unwrap();

        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn test_empty_csv_error() {
        let result = parse_bytes_auto(b"", None, true);
        assert!(matches!(result, Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_detect_delimiter_defaults_to_comma() {
        assert_eq!(detect_delimiter("single"), ',');
    }

    #[test]
    fn test_auto_parse() {
        let csv = "name;age\nAlice;30\nBob;25";
        let result = parse_bytes_auto(csv.as_bytes(), None, true).unwrap();

        assert_eq!(result.delimiter, ';');
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.headers, vec!["name", "age"]);
    }

    #[test]
    fn test_bom_removed() {
        let bytes = "\u{feff}MeetName,Time\nSEC,41.39".as_bytes();
        let decoded = decode_content(bytes, "utf-8").unwrap();
        assert!(decoded.starts_with("MeetName"));
    }

    #[test]
    fn test_utf8_names_survive_detection() {
        for name in ["Müller, Ana", "Sørensen, Ana"] {
            let csv = format!("MeetName,AthFullName\nSEC 2022,\"{}\"\n", name);
            let result = parse_bytes_auto(csv.as_bytes(), None, true).unwrap();

            assert_eq!(result.encoding, "utf-8");
            assert_eq!(result.rows[0][1], name);
        }
    }

    #[test]
    fn test_latin1_currency_sign() {
        let decoded = decode_content(&[0xA4], "iso-8859-1").unwrap();
        assert_eq!(decoded, "\u{a4}");
        assert_ne!(decode_content(&[0xA4], "latin1").unwrap(), "€");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }
}
