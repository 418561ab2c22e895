//! HTTP surface: two read-only endpoints over the hotspot feed.
//!
//! `GET /fires/stats` returns the summary alone, `GET /fires/map` returns
//! every classified detection plus the same summary. Both accept an
//! optional `days` query parameter bounded to the feed's lookback window.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::config::{MAX_LOOKBACK_DAYS, MIN_LOOKBACK_DAYS};
use crate::errors::FeedError;
use crate::report::{self, MapResponse};
use crate::services::fire_feed::HotspotFeed;
use crate::stats::FireStats;

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn HotspotFeed>,
    /// Lookback applied when the request carries no `days` parameter.
    pub default_days: u8,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("days must be between 1 and 10, got {0}")]
    InvalidDays(u8),
    #[error("fire feed unavailable: {0}")]
    Feed(#[from] FeedError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidDays(_) => StatusCode::BAD_REQUEST,
            ApiError::Feed(source) => {
                error!(error = %source, "fire feed request failed");
                StatusCode::BAD_GATEWAY
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct DaysQuery {
    days: Option<u8>,
}

/// Resolves the effective lookback, rejecting out-of-range requests before
/// any feed traffic happens.
fn validate_days(requested: Option<u8>, default_days: u8) -> Result<u8, ApiError> {
    let days = requested.unwrap_or(default_days);
    if !(MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&days) {
        return Err(ApiError::InvalidDays(days));
    }
    Ok(days)
}

async fn fires_stats(
    State(state): State<AppState>,
    Query(query): Query<DaysQuery>,
) -> Result<Json<FireStats>, ApiError> {
    let days = validate_days(query.days, state.default_days)?;
    let hotspots = state.feed.fetch_hotspots(days).await?;
    Ok(Json(report::stats_response(&hotspots)))
}

async fn fires_map(
    State(state): State<AppState>,
    Query(query): Query<DaysQuery>,
) -> Result<Json<MapResponse>, ApiError> {
    let days = validate_days(query.days, state.default_days)?;
    let hotspots = state.feed.fetch_hotspots(days).await?;
    Ok(Json(report::map_response(&hotspots)))
}

pub fn router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/fires/stats", get(fires_stats))
        .route("/fires/map", get(fires_map))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("serving fire endpoints on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
