/// Measurement record and error types for the Euskadi air-quality scraper.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O, only types and their trait impls.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

// ---------------------------------------------------------------------------
// Measurement records
// ---------------------------------------------------------------------------

/// One hourly reading of one contaminant at one station.
///
/// Produced only by `ingest::euskadi::parse_hourly`; immutable once created
/// and collected in report order. Field names double as the JSON object keys
/// and the table column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Measurement {
    /// Station name, lowercased.
    pub station: String,
    /// Timestamp of the hourly slot, "YYYY-MM-DD HH:MM".
    pub time: String,
    /// Contaminant name, lowercased.
    pub contaminant: String,
    /// Value exactly as reported by the service. The feed mixes integers,
    /// decimals and flagged readings, so no numeric validation is applied.
    pub measurement: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching a report from the Euskadi service.
#[derive(Debug, PartialEq)]
pub enum AirNetError {
    /// Non-2xx HTTP response from the service.
    HttpError(u16),
    /// The request could not be sent or the body could not be read.
    Transport(String),
}

impl std::fmt::Display for AirNetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AirNetError::HttpError(code) => write!(f, "HTTP error: {}", code),
            AirNetError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for AirNetError {}

impl From<reqwest::Error> for AirNetError {
    fn from(err: reqwest::Error) -> Self {
        AirNetError::Transport(err.to_string())
    }
}
