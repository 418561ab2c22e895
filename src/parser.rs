//! Header-driven parser for the FIRMS area CSV payload.
//!
//! Column layout differs between fire products, so cells are located by
//! header name rather than position. Only `latitude`, `longitude` and
//! `confidence` are required; `bright_ti4`, `acq_date` and `acq_time`
//! degrade to defaults when a product omits them, and columns this service
//! does not use are ignored.

use csv::StringRecord;
use thiserror::Error;

use crate::services::fire_feed::Hotspot;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("column '{column}' holds unparseable value '{value}'")]
    InvalidField {
        column: &'static str,
        value: String,
    },
    #[error("malformed CSV payload: {0}")]
    Csv(#[from] csv::Error),
}

/// Parses a raw area-CSV payload into detection records.
///
/// A payload with a valid header and zero data rows parses to an empty
/// vector. An empty payload has no header and fails with
/// [`ParseError::MissingColumn`], as does any non-CSV body the provider
/// substitutes for the data (e.g. an HTML error page).
///
/// # Errors
///
/// Any unreadable row fails the whole parse; there are no partial results.
pub fn parse_hotspots(payload: &str) -> Result<Vec<Hotspot>, ParseError> {
    let mut reader = csv::Reader::from_reader(payload.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|header| header == name);

    let latitude = column("latitude").ok_or(ParseError::MissingColumn("latitude"))?;
    let longitude = column("longitude").ok_or(ParseError::MissingColumn("longitude"))?;
    let confidence = column("confidence").ok_or(ParseError::MissingColumn("confidence"))?;
    let brightness = column("bright_ti4");
    let acq_date = column("acq_date");
    let acq_time = column("acq_time");

    let mut hotspots = Vec::new();
    for record in reader.records() {
        let record = record?;
        hotspots.push(Hotspot {
            latitude: float_cell(&record, latitude, "latitude")?,
            longitude: float_cell(&record, longitude, "longitude")?,
            confidence: cell(&record, confidence).to_string(),
            brightness: optional_float_cell(&record, brightness, "bright_ti4")?,
            acq_date: text_cell(&record, acq_date),
            acq_time: text_cell(&record, acq_time),
        });
    }

    Ok(hotspots)
}

fn cell<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("")
}

fn text_cell(record: &StringRecord, index: Option<usize>) -> String {
    index.map(|i| cell(record, i).to_string()).unwrap_or_default()
}

fn float_cell(record: &StringRecord, index: usize, column: &'static str) -> Result<f64, ParseError> {
    let raw = cell(record, index);
    raw.trim().parse().map_err(|_| ParseError::InvalidField {
        column,
        value: raw.to_string(),
    })
}

/// An absent column and an empty cell both mean "no reading".
fn optional_float_cell(
    record: &StringRecord,
    index: Option<usize>,
    column: &'static str,
) -> Result<Option<f64>, ParseError> {
    match index {
        Some(i) if !cell(record, i).trim().is_empty() => float_cell(record, i, column).map(Some),
        _ => Ok(None),
    }
}
