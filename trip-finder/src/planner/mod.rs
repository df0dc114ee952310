//! Trip planner.
//!
//! This module implements the core of the trip finder: a depth-first
//! enumeration of flight chains from an origin to a destination, followed
//! by pricing, baggage filtering and ranking of what it finds.
//!
//! Neither step does I/O or keeps state between calls; the same flights and
//! parameters always produce the same ordered results.

mod config;
mod rank;
mod search;

pub use config::SearchConfig;
pub use rank::{PricedResult, aggregate_results, price_itinerary, rank_results};
pub use search::{
    SearchError, SearchOutcome, SearchParameters, TripReport, TripSearch, find_trips,
};
