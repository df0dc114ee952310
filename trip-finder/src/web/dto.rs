//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::TripReport;
use crate::report::ResultRecord;

/// Query string for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Origin airport code (case-insensitive)
    pub origin: String,

    /// Destination airport code (case-insensitive)
    pub destination: String,

    /// Number of checked bags
    #[serde(default)]
    pub bags: u32,

    /// Maximum intermediate connections
    #[serde(default)]
    pub stops: usize,

    /// Return-trip flag, echoed into the search parameters
    #[serde(default, rename = "return")]
    pub return_trip: bool,
}

/// Response for `GET /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Feasible itineraries, cheapest first
    pub results: Vec<ResultRecord>,

    /// Itineraries found before bag filtering
    pub itineraries_found: usize,

    /// Partial itineraries expanded by the search
    pub branches_explored: usize,
}

/// Response for `GET /flights`.
#[derive(Debug, Serialize)]
pub struct FlightCountResponse {
    /// Number of flights in the loaded table
    pub count: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl SearchResponse {
    /// Create from a search report.
    pub fn from_report(report: &TripReport) -> Self {
        Self {
            results: report.results.iter().map(ResultRecord::from_result).collect(),
            itineraries_found: report.itineraries_found,
            branches_explored: report.branches_explored,
        }
    }
}
