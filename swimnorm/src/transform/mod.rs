//! Transformation module.
//!
//! This module turns raw export rows into formatted results:
//! - Time: race-time notation to seconds
//! - Dates: permissive date detection
//! - Fields: per-column cleanup and decomposition
//! - Normalizer: the ordered per-row steps
//! - Pipeline: file-level read, normalize, write

pub mod dates;
pub mod fields;
pub mod normalizer;
pub mod pipeline;
pub mod time;

pub use dates::{compact_date, parse_date};
pub use fields::{abbreviate_strokes, build_id, split_event, split_name, strip_artifacts};
pub use normalizer::{bind_rows, clean_record, normalize_records};
pub use pipeline::*;
pub use time::{parse_seconds, round_hundredths};
