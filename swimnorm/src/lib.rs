//! # swimnorm - USA Swimming Top Times export cleaner
//!
//! swimnorm takes an NCAA Top Times Report CSV exported from USA Swimming,
//! strips its export artifacts, splits composite fields, converts race times
//! to seconds and writes an analysis-ready `FORMATTED_<description>.csv`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Export CSV │────▶│   Parser    │────▶│ Normalizer  │────▶│ FORMATTED_  │
//! │  (21 cols)  │     │  (auto-enc) │     │ (per row)   │     │  *.csv      │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use swimnorm::{normalize_file, NormalizeOptions};
//! use std::path::Path;
//!
//! let result = normalize_file(Path::new("top_times.csv"), &NormalizeOptions::default()).unwrap();
//! println!("Normalized {} results", result.records.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Raw, cleaned and output records
//! - [`parser`] - CSV reading with auto-detection
//! - [`transform`] - Time parsing, field cleanup, normalizer and pipeline
//! - [`output`] - Formatted CSV writer
//! - [`logs`] - Pipeline progress logging

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod output;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CsvError,
    DateError,
    FieldError,
    OutputError,
    PipelineError,
    RowError,
    SchemaError,
    TimeError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    CleanedRecord,
    OutputRecord,
    RawRecord,
    OUTPUT_COLUMNS,
    RAW_SCHEMA,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_bytes_auto,
    parse_file_auto,
    parse_with_delimiter,
    ParseResult,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    abbreviate_strokes,
    bind_rows,
    build_id,
    clean_record,
    compact_date,
    normalize_records,
    parse_date,
    parse_seconds,
    round_hundredths,
    split_event,
    split_name,
    strip_artifacts,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    normalize,
    normalize_bytes,
    normalize_file,
    CsvInfo,
    NormalizeOptions,
    NormalizeResult,
    DEFAULT_DESCRIPTION,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{output_path, write_formatted, write_records};
