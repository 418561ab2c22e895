//! Client for the NASA FIRMS area API.
//!
//! The API embeds the map key as a URL path segment, so neither the
//! request URL nor any response snippet may reach logs or error values
//! unsanitized.

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::config::FirmsConfig;
use crate::errors::FeedError;
use crate::fetch::{self, HttpClient};
use crate::parser::parse_hotspots;
use crate::services::fire_feed::{Hotspot, HotspotFeed};

/// Longest response-body excerpt carried inside an error value.
const ERROR_BODY_MAX_CHARS: usize = 200;

/// Fetches area detections from FIRMS, generic over its transport so tests
/// can stub the HTTP layer.
pub struct FirmsAreaClient<C> {
    http: C,
    config: FirmsConfig,
}

impl<C> FirmsAreaClient<C> {
    pub fn new(http: C, config: FirmsConfig) -> Self {
        Self { http, config }
    }

    /// Request URL for a `days` lookback window:
    /// `{base}/{map_key}/{satellite}/{west},{south},{east},{north}/{days}`.
    fn area_url(&self, days: u8) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.config.base_url, self.config.map_key, self.config.satellite, self.config.bbox, days
        )
    }

    /// Replaces every occurrence of the map key before `text` can reach an
    /// error value or a log line.
    fn redact(&self, text: &str) -> String {
        // an empty needle would interleave the marker between every byte
        if self.config.map_key.is_empty() {
            return text.to_string();
        }
        text.replace(&self.config.map_key, "<map-key>")
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(ERROR_BODY_MAX_CHARS).collect()
}

#[async_trait]
impl<C: HttpClient> HotspotFeed for FirmsAreaClient<C> {
    async fn fetch_hotspots(&self, days: u8) -> Result<Vec<Hotspot>, FeedError> {
        let url = Url::parse(&self.area_url(days))
            .map_err(|e| FeedError::InvalidUrl(e.to_string()))?;

        debug!(satellite = %self.config.satellite, days, "Requesting FIRMS area detections");

        let response = fetch::get(&self.http, url)
            .await
            .map_err(|e| FeedError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body: snippet(&self.redact(&body)),
            });
        }

        let payload = response
            .text()
            .await
            .map_err(|e| FeedError::Http(e.without_url()))?;
        let hotspots = parse_hotspots(&payload)?;

        debug!(detections = hotspots.len(), days, "FIRMS payload parsed");
        Ok(hotspots)
    }
}
