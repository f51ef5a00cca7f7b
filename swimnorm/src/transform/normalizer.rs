//! Row normalizer: raw export rows to formatted results.
//!
//! Every row goes through the same ordered steps:
//!
//! ```text
//! bind to schema → strip artifacts → split name → abbreviate strokes
//!   → split event → parse dates → ID_DOB → TimeSS → ID → project
//! ```
//!
//! The first failing row aborts the table; nothing is skipped.

use tracing::debug;

use crate::error::{RowError, RowResult};
use crate::models::{CleanedRecord, OutputRecord, RawRecord};

use super::dates::{compact_date, parse_date};
use super::fields::{abbreviate_strokes, build_id, split_event, split_name, strip_artifacts};
use super::time::{parse_seconds, round_hundredths};

/// Bind positional rows to the raw schema, rejecting any other width.
pub fn bind_rows(rows: Vec<Vec<String>>) -> RowResult<Vec<RawRecord>> {
    rows.into_iter()
        .enumerate()
        .map(|(row, fields)| {
            RawRecord::from_fields(fields).map_err(|e| RowError::new(row, "<row>", e))
        })
        .collect()
}

/// Clean one bound row and derive its computed fields.
///
/// `row` is only used to locate errors.
pub fn clean_record(mut raw: RawRecord, row: usize) -> RowResult<CleanedRecord> {
    raw.map_fields(strip_artifacts);

    let name = split_name(&raw.ath_full_name).map_err(|e| RowError::new(row, "AthFullName", e))?;

    raw.full_desc = abbreviate_strokes(&raw.full_desc);
    let event = split_event(&raw.full_desc).map_err(|e| RowError::new(row, "FullDesc", e))?;

    let dob = parse_date(&raw.dob).map_err(|e| RowError::new(row, "DOB", e))?;
    let date = parse_date(&raw.date).map_err(|e| RowError::new(row, "Date", e))?;
    let id_dob = compact_date(dob);

    let time_ss = parse_seconds(&raw.time)
        .map(round_hundredths)
        .map_err(|e| RowError::new(row, "Time", e))?;

    let id = build_id(&name.last, &id_dob, &event);
    debug!(row, %id, time_ss, "row cleaned");

    Ok(CleanedRecord {
        raw,
        last: name.last,
        first: name.first,
        distance: event.distance,
        stroke: event.stroke,
        course: event.course,
        gender: event.gender,
        dob,
        date,
        id_dob,
        time_ss,
        id,
    })
}

/// Normalize a whole table without touching the filesystem.
pub fn normalize_records(rows: Vec<Vec<String>>) -> RowResult<Vec<OutputRecord>> {
    bind_rows(rows)?
        .into_iter()
        .enumerate()
        .map(|(row, raw)| clean_record(raw, row).map(|cleaned| cleaned.to_output()))
        .collect()
}
