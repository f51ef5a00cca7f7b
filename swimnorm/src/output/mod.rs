//! Formatted CSV writer.
//!
//! Layout: a header row whose first cell is empty, then one line per record
//! starting with its 0-based index.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, OutputResult};
use crate::models::{OutputRecord, OUTPUT_COLUMNS};

/// Prefix of every formatted file name.
pub const OUTPUT_PREFIX: &str = "FORMATTED_";

/// Path of the formatted file for `description` inside `dir`.
pub fn output_path(dir: impl AsRef<Path>, description: &str) -> OutputResult<PathBuf> {
    if description.is_empty() || description.contains(['/', '\\']) {
        return Err(OutputError::InvalidDescription(description.to_string()));
    }
    Ok(dir
        .as_ref()
        .join(format!("{}{}.csv", OUTPUT_PREFIX, description)))
}

/// Serialize records, index column first, to any writer.
pub fn write_records<W: Write>(writer: W, records: &[OutputRecord]) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(std::iter::once("").chain(OUTPUT_COLUMNS))?;
    for (index, record) in records.iter().enumerate() {
        let index = index.to_string();
        let cells = record.to_cells();
        csv_writer.write_record(
            std::iter::once(index.as_str()).chain(cells.iter().map(String::as_str)),
        )?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write `FORMATTED_<description>.csv` into `dir`, creating the directory if needed.
///
/// Returns the path written.
pub fn write_formatted(
    dir: impl AsRef<Path>,
    description: &str,
    records: &[OutputRecord],
) -> OutputResult<PathBuf> {
    let path = output_path(&dir, description)?;
    fs::create_dir_all(dir.as_ref())?;

    let file = fs::File::create(&path)?;
    write_records(file, records)?;
    Ok(path)
}
