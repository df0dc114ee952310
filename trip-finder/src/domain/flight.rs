//! Flight record type.
//!
//! A `Flight` is one row of the flight table: a single leg between two
//! airports with its schedule, fare and baggage allowance.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use super::AirportCode;

/// A single flight leg.
///
/// Flights are immutable once loaded. The search shares them between
/// branches behind `Arc`, so copying an itinerary never copies flights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Opaque flight identifier (e.g. "ZH214")
    pub flight_no: String,
    /// Departure airport
    pub origin: AirportCode,
    /// Arrival airport
    pub destination: AirportCode,
    /// Scheduled departure
    pub departure: NaiveDateTime,
    /// Scheduled arrival, strictly after departure
    pub arrival: NaiveDateTime,
    /// Fare without luggage
    pub base_price: Decimal,
    /// Fare for each checked bag
    pub bag_price: Decimal,
    /// Maximum checked bags this leg can carry
    pub bags_allowed: u32,
}

impl Flight {
    /// Returns the time in the air.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns the layover before `next` if `next` departs from the airport
    /// this flight lands at.
    ///
    /// The gap is `next.departure - self.arrival` and may be negative when
    /// `next` leaves before this flight lands. Callers decide which gaps are
    /// acceptable.
    pub fn connection_to(&self, next: &Flight) -> Option<Duration> {
        if self.destination != next.origin {
            return None;
        }
        Some(next.departure.signed_duration_since(self.arrival))
    }
}
