//! Domain types for the trip finder.
//!
//! This module contains the value types the search works on. All types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod airport;
mod error;
mod flight;
mod itinerary;
mod time;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use flight::Flight;
pub use itinerary::Itinerary;
pub use time::{
    TIMESTAMP_FORMAT, TimeError, format_timestamp, format_travel_time, parse_timestamp,
};
