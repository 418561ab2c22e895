//! Trait and types for a satellite hotspot-detection feed.

use crate::errors::FeedError;

/// One raw thermal-anomaly detection reported by the feed.
///
/// Records are immutable once parsed: the pipeline classifies and
/// aggregates them, serializes the result, and drops them at the end of
/// the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    /// Detection latitude in degrees.
    pub latitude: f64,
    /// Detection longitude in degrees.
    pub longitude: f64,
    /// Raw confidence code as reported: `"h"`, `"n"`, `"l"`, or any other
    /// token the provider chooses to emit.
    pub confidence: String,
    /// I-4 channel brightness temperature in kelvin, when the product
    /// carries one.
    pub brightness: Option<f64>,
    /// Acquisition date, `YYYY-MM-DD`. Empty when the product omits it.
    pub acq_date: String,
    /// Acquisition time as `HHMM` digits, possibly unpadded (e.g. `"530"`).
    /// Empty when the product omits it.
    pub acq_time: String,
}

/// Abstraction over a hotspot-detection provider (e.g., NASA FIRMS).
///
/// The serving layer only sees this trait, so tests can substitute a fake
/// feed and the transport can change without touching the endpoints.
#[async_trait::async_trait]
pub trait HotspotFeed: Send + Sync {
    /// Fetches all detections inside the deployment bounding box over the
    /// trailing `days` window.
    ///
    /// Callers validate `days` against the accepted range before invoking
    /// this; implementations trust it. Zero detections is a successful
    /// empty result, not an error.
    async fn fetch_hotspots(&self, days: u8) -> Result<Vec<Hotspot>, FeedError>;
}
