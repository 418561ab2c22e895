//! Output formatting and persistence for fire statistics.
//!
//! Supports JSON serialization to the log, JSON dumps to disk, and CSV
//! append for tracking summaries across runs.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::stats::FireStats;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs fire statistics as pretty-printed JSON.
pub fn print_json(stats: &FireStats) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

/// Appends a [`FireStats`] record as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, stats: &FireStats) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(stats)?;
    writer.flush()?;

    Ok(())
}

/// Writes any serializable payload to disk as pretty-printed JSON.
pub fn write_json(path: &str, payload: &impl Serialize) -> Result<()> {
    std::fs::write(path, serde_json::to_vec_pretty(payload)?)?;
    info!(path, "Wrote JSON dump");
    Ok(())
}
