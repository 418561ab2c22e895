//! Deployment-fixed configuration for the FIRMS fetch.
//!
//! The map key, satellite and bounding box are deployment concerns, not
//! request parameters: only the lookback window varies per request. The
//! whole structure is loaded once at startup and injected into the feed
//! client.

use anyhow::{Context, Result, anyhow, ensure};
use std::fmt;
use std::str::FromStr;

/// Smallest lookback window the feed accepts, in days.
pub const MIN_LOOKBACK_DAYS: u8 = 1;
/// Largest lookback window the feed accepts, in days.
pub const MAX_LOOKBACK_DAYS: u8 = 10;

const DEFAULT_BASE_URL: &str = "https://firms.modaps.eosdis.nasa.gov/api/area/csv";
const DEFAULT_SATELLITE: &str = "VIIRS_NOAA20_NRT";
const DEFAULT_BBOX: &str = "68,6,97,37"; // India
const DEFAULT_LOOKBACK_DAYS: u8 = 3;

/// Rectangular query region in degree bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl FromStr for BoundingBox {
    type Err = anyhow::Error;

    /// Parses the `west,south,east,north` form used both in configuration
    /// and in the feed URL.
    fn from_str(s: &str) -> Result<Self> {
        let bounds: Vec<&str> = s.split(',').map(str::trim).collect();
        ensure!(
            bounds.len() == 4,
            "bounding box needs 4 comma-separated bounds (west,south,east,north), got {}",
            bounds.len()
        );

        let bound = |raw: &str| -> Result<f64> {
            raw.parse()
                .with_context(|| format!("invalid bounding box value '{raw}'"))
        };

        Ok(BoundingBox {
            west: bound(bounds[0])?,
            south: bound(bounds[1])?,
            east: bound(bounds[2])?,
            north: bound(bounds[3])?,
        })
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

/// Everything the feed client needs to query the detection service.
#[derive(Clone)]
pub struct FirmsConfig {
    pub map_key: String,
    pub satellite: String,
    pub bbox: BoundingBox,
    pub default_days: u8,
    pub base_url: String,
}

// Manual impl so a logged config can never expose the map key.
impl fmt::Debug for FirmsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirmsConfig")
            .field("map_key", &"<redacted>")
            .field("satellite", &self.satellite)
            .field("bbox", &self.bbox)
            .field("default_days", &self.default_days)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl FirmsConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `get`, falling back to defaults for
    /// everything except `FIRMS_MAP_KEY`.
    ///
    /// Parameterizing the lookup keeps tests from mutating the process
    /// environment.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let map_key = get("FIRMS_MAP_KEY").ok_or_else(|| anyhow!("FIRMS_MAP_KEY must be set"))?;
        ensure!(!map_key.trim().is_empty(), "FIRMS_MAP_KEY must not be empty");

        let satellite = get("FIRMS_SATELLITE").unwrap_or_else(|| DEFAULT_SATELLITE.to_string());

        let bbox = get("FIRMS_BBOX")
            .as_deref()
            .unwrap_or(DEFAULT_BBOX)
            .parse()
            .context("FIRMS_BBOX is not a valid bounding box")?;

        let default_days = match get("FIRMS_DEFAULT_DAYS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("FIRMS_DEFAULT_DAYS is not a number: '{raw}'"))?,
            None => DEFAULT_LOOKBACK_DAYS,
        };
        ensure!(
            (MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&default_days),
            "FIRMS_DEFAULT_DAYS must be between {MIN_LOOKBACK_DAYS} and {MAX_LOOKBACK_DAYS}, got {default_days}"
        );

        let base_url = get("FIRMS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(FirmsConfig {
            map_key,
            satellite,
            bbox,
            default_days,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &'static [(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_load_applies_defaults() {
        let config = FirmsConfig::load(env_of(&[("FIRMS_MAP_KEY", "abc123")])).unwrap();

        assert_eq!(config.map_key, "abc123");
        assert_eq!(config.satellite, "VIIRS_NOAA20_NRT");
        assert_eq!(config.bbox.to_string(), "68,6,97,37");
        assert_eq!(config.default_days, 3);
        assert_eq!(
            config.base_url,
            "https://firms.modaps.eosdis.nasa.gov/api/area/csv"
        );
    }

    #[test]
    fn test_load_honors_overrides() {
        let config = FirmsConfig::load(env_of(&[
            ("FIRMS_MAP_KEY", "abc123"),
            ("FIRMS_SATELLITE", "VIIRS_SNPP_NRT"),
            ("FIRMS_BBOX", "-125,32,-113,42"),
            ("FIRMS_DEFAULT_DAYS", "7"),
            ("FIRMS_BASE_URL", "https://example.test/area/csv"),
        ]))
        .unwrap();

        assert_eq!(config.satellite, "VIIRS_SNPP_NRT");
        assert_eq!(config.bbox.west, -125.0);
        assert_eq!(config.bbox.north, 42.0);
        assert_eq!(config.default_days, 7);
        assert_eq!(config.base_url, "https://example.test/area/csv");
    }

    #[test]
    fn test_load_requires_map_key() {
        let err = FirmsConfig::load(env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("FIRMS_MAP_KEY"));

        let err = FirmsConfig::load(env_of(&[("FIRMS_MAP_KEY", "  ")])).unwrap_err();
        assert!(err.to_string().contains("FIRMS_MAP_KEY"));
    }

    #[test]
    fn test_load_rejects_out_of_range_default_days() {
        for days in ["0", "11"] {
            let result = FirmsConfig::load(|key| match key {
                "FIRMS_MAP_KEY" => Some("abc123".to_string()),
                "FIRMS_DEFAULT_DAYS" => Some(days.to_string()),
                _ => None,
            });
            assert!(result.is_err(), "days {days} should be rejected");
        }
    }

    #[test]
    fn test_load_rejects_malformed_bbox() {
        for bbox in ["68,6,97", "a,b,c,d", ""] {
            let result = FirmsConfig::load(|key| match key {
                "FIRMS_MAP_KEY" => Some("abc123".to_string()),
                "FIRMS_BBOX" => Some(bbox.to_string()),
                _ => None,
            });
            assert!(result.is_err(), "bbox {bbox:?} should be rejected");
        }
    }

    #[test]
    fn test_bbox_display_matches_feed_url_form() {
        let bbox: BoundingBox = "68,6,97,37".parse().unwrap();
        assert_eq!(bbox.to_string(), "68,6,97,37");

        let bbox: BoundingBox = "-124.5, 32.0, -113.25, 42.0".parse().unwrap();
        assert_eq!(bbox.to_string(), "-124.5,32,-113.25,42");
    }

    #[test]
    fn test_debug_never_prints_map_key() {
        let config = FirmsConfig::load(env_of(&[("FIRMS_MAP_KEY", "supersecret")])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("supersecret"));
        assert!(rendered.contains("<redacted>"));
    }
}
