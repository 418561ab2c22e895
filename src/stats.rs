use chrono::Utc;
use serde::Serialize;

use crate::confidence::Confidence;
use crate::services::fire_feed::Hotspot;

/// Summary statistics over one fetched detection set.
///
/// Counts are partitioned by [`Confidence`], with unrecognized codes
/// counted into `low`, so `high + medium + low` always equals `total`.
/// Field order is the serialized order of the statistics endpoint.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct FireStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Mean brightness over the records that carry a reading, rounded to
    /// one decimal place. `0.0` when none do.
    pub avg_brightness: f64,
    /// Wall-clock UTC time of aggregation, `YYYY-MM-DD HH:MM:SS`. Not
    /// derived from the records.
    pub updated: String,
}

impl FireStats {
    /// Reduces `hotspots` in a single pass. Recomputed fresh per request;
    /// nothing here is cached.
    pub fn from_hotspots(hotspots: &[Hotspot]) -> Self {
        let mut s = FireStats {
            updated: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Default::default()
        };

        let mut brightness_sum = 0.0;
        let mut brightness_count = 0usize;

        for hotspot in hotspots {
            s.total += 1;

            match Confidence::from_code(&hotspot.confidence) {
                Confidence::High => s.high += 1,
                Confidence::Nominal => s.medium += 1,
                Confidence::Low | Confidence::Unknown => s.low += 1,
            }

            if let Some(brightness) = hotspot.brightness {
                brightness_sum += brightness;
                brightness_count += 1;
            }
        }

        if brightness_count > 0 {
            s.avg_brightness = round1(brightness_sum / brightness_count as f64);
        }

        s
    }
}

/// Rounds to one decimal place, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
