//! Public response shapes for the fire endpoints.
//!
//! Field names and nesting are part of the API contract; front ends bind
//! to them directly.

use serde::Serialize;

use crate::confidence::Confidence;
use crate::services::fire_feed::Hotspot;
use crate::stats::FireStats;

/// Brightness substituted when a record carries no reading.
pub const DEFAULT_BRIGHTNESS: f64 = 300.0;

#[derive(Debug, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct ConfidenceView {
    /// Raw code as reported by the feed.
    pub value: String,
    /// Human-readable bucket label.
    pub bucket: &'static str,
}

/// One classified detection as exposed by the map endpoint.
#[derive(Debug, Serialize)]
pub struct FireView {
    pub location: Location,
    pub confidence: ConfidenceView,
    pub brightness: f64,
    pub date: String,
    /// Acquisition time, left-zero-padded to the 4-digit `HHMM` form.
    pub time: String,
    /// Display color for map rendering.
    pub color: &'static str,
}

impl FireView {
    pub fn from_hotspot(hotspot: &Hotspot) -> Self {
        let confidence = Confidence::from_code(&hotspot.confidence);
        FireView {
            location: Location {
                lat: hotspot.latitude,
                lon: hotspot.longitude,
            },
            confidence: ConfidenceView {
                value: hotspot.confidence.clone(),
                bucket: confidence.bucket(),
            },
            brightness: hotspot.brightness.unwrap_or(DEFAULT_BRIGHTNESS),
            date: hotspot.acq_date.clone(),
            time: pad_time(&hotspot.acq_time),
            color: confidence.color(),
        }
    }
}

/// Full payload of the map endpoint.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub fires: Vec<FireView>,
    pub statistics: FireStats,
}

/// Assembles the map payload: every detection classified for display plus
/// the statistics over the same set. An empty set yields an empty `fires`
/// list with zeroed statistics.
pub fn map_response(hotspots: &[Hotspot]) -> MapResponse {
    MapResponse {
        fires: hotspots.iter().map(FireView::from_hotspot).collect(),
        statistics: FireStats::from_hotspots(hotspots),
    }
}

/// Assembles the statistics payload, which is the summary serialized as-is.
pub fn stats_response(hotspots: &[Hotspot]) -> FireStats {
    FireStats::from_hotspots(hotspots)
}

fn pad_time(raw: &str) -> String {
    format!("{raw:0>4}")
}
