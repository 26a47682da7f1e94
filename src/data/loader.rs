use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::error::DatasetError;
use super::model::{EvDataset, RawRecord, REQUIRED_COLUMNS};
use super::normalize::{missing_counts, normalize};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the vehicle dataset from a comma-separated file.
pub fn load_file(path: &Path) -> Result<EvDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "csv" {
        return Err(DatasetError::UnsupportedExtension(ext).into());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    load_csv(file).with_context(|| format!("loading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least the columns in
/// [`REQUIRED_COLUMNS`]; extra columns are ignored. Cells that fail to parse
/// as numbers do not fail the load, they become missing values.
pub fn load_csv<R: Read>(source: R) -> Result<EvDataset> {
    let rows = read_raw_records(source)?;
    if rows.is_empty() {
        return Err(DatasetError::Empty.into());
    }

    let records = normalize(rows);
    for (field, n) in missing_counts(&records) {
        if n > 0 {
            log::debug!("{n} of {} rows have no usable '{field}' value", records.len());
        }
    }

    Ok(EvDataset::from_records(records))
}

/// Read every row as untyped text, checking the header first.
pub fn read_raw_records<R: Read>(source: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers().context("reading CSV headers")?;
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col.to_string()).into());
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        rows.push(row);
    }
    Ok(rows)
}
