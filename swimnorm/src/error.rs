//! Error types for the swimnorm normalization pipeline.
//!
//! One error type per layer:
//!
//! - [`CsvError`] - reading and decoding the raw export
//! - [`TimeError`] - race-time tokens that are not valid seconds notation
//! - [`DateError`] - date text no known format accepts
//! - [`SchemaError`] - rows or composite fields with the wrong shape
//! - [`RowError`] - any field failure, pinned to a row index and field name
//! - [`OutputError`] - writing the formatted CSV
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Ingest Errors
// =============================================================================

/// Errors while reading the raw export.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to decode the text encoding.
    #[error("Failed to decode {encoding} content: {message}")]
    EncodingError { encoding: String, message: String },

    /// Malformed CSV record.
    #[error("Invalid CSV at line {line}: {message}")]
    ParseError { line: u64, message: String },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        CsvError::ParseError {
            line,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// A race-time token that cannot be turned into seconds.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Cannot parse time '{token}': {reason}")]
pub struct TimeError {
    pub token: String,
    pub reason: String,
}

impl TimeError {
    pub fn new(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

/// Date text that no supported format recognizes.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unrecognized date '{0}'")]
pub struct DateError(pub String);

/// A row or composite field that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Row width differs from the fixed raw schema.
    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// Athlete name without exactly one comma.
    #[error("Athlete name '{0}' must contain exactly one comma")]
    NameFormat(String),

    /// Event description that does not split into four tokens.
    #[error("Event description '{description}' has {found} space-separated parts, expected 4")]
    EventFormat { description: String, found: usize },
}

/// What went wrong inside a single field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// A field failure located in the input table.
///
/// `row` is the 0-based position of the data row (header excluded).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Row {row}, field '{field}': {source}")]
pub struct RowError {
    pub row: usize,
    pub field: &'static str,
    #[source]
    pub source: FieldError,
}

impl RowError {
    pub fn new(row: usize, field: &'static str, source: impl Into<FieldError>) -> Self {
        Self {
            row,
            field,
            source: source.into(),
        }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the formatted table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory or file could not be written.
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("Failed to serialize CSV: {0}")]
    CsvError(#[from] csv::Error),

    /// Description cannot be used in a file name.
    #[error("Invalid description '{0}': must be non-empty and contain no path separators")]
    InvalidDescription(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::normalize`] and
/// [`crate::normalize_file`]. Any failure aborts the whole table.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Ingest error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Row-level transformation error.
    #[error("Normalization error: {0}")]
    Row(#[from] RowError),

    /// Output error.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for ingest operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for per-row operations.
pub type RowResult<T> = Result<T, RowError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
