//! Failure taxonomy for the remote detection fetch.

use thiserror::Error;

use crate::parser::ParseError;

/// Why a feed fetch produced no usable detection set.
///
/// Every variant means the whole request failed; there are no partial
/// results. Transport errors are stored with their URL stripped and
/// response bodies are sanitized before they get here, so the rendered
/// message never contains the map key.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Http(reqwest::Error),
    #[error("feed returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("feed URL invalid: {0}")]
    InvalidUrl(String),
    #[error("feed payload unreadable: {0}")]
    Parse(#[from] ParseError),
}
