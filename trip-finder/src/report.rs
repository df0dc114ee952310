//! Output records for search results.
//!
//! `ResultRecord` is the serialized shape of a priced itinerary, shared by
//! the CLI's JSON output and the HTTP API. The text renderer is for people
//! reading results in a terminal.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::{AirportCode, Flight, format_timestamp, format_travel_time};
use crate::planner::{PricedResult, SearchParameters};

/// One flight within a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRecord {
    pub flight_no: String,
    pub origin: AirportCode,
    pub destination: AirportCode,
    /// Departure, `YYYY-MM-DDTHH:MM:SS`
    pub departure: String,
    /// Arrival, `YYYY-MM-DDTHH:MM:SS`
    pub arrival: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub bag_price: Decimal,
    pub bags_allowed: u32,
}

/// A priced itinerary, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub flights: Vec<FlightRecord>,
    pub bags_allowed: u32,
    pub bags_count: u32,
    pub destination: AirportCode,
    pub origin: AirportCode,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// `H:MM:SS`, with a day prefix for trips of 24 hours or more
    pub travel_time: String,
}

impl FlightRecord {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no.clone(),
            origin: flight.origin,
            destination: flight.destination,
            departure: format_timestamp(&flight.departure),
            arrival: format_timestamp(&flight.arrival),
            base_price: flight.base_price,
            bag_price: flight.bag_price,
            bags_allowed: flight.bags_allowed,
        }
    }
}

impl ResultRecord {
    /// Create from a priced result.
    pub fn from_result(result: &PricedResult) -> Self {
        Self {
            flights: result
                .itinerary
                .legs()
                .iter()
                .map(|f| FlightRecord::from_flight(f))
                .collect(),
            bags_allowed: result.bags_allowed,
            bags_count: result.bags_count,
            destination: result.destination,
            origin: result.origin,
            total_price: result.total_price,
            travel_time: format_travel_time(result.travel_time),
        }
    }
}

/// Serialize results as a pretty-printed JSON array (4-space indent).
pub fn to_json(results: &[PricedResult]) -> serde_json::Result<String> {
    let records: Vec<ResultRecord> = results.iter().map(ResultRecord::from_result).collect();

    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render a search summary and its results for a terminal.
pub fn render_text(
    params: &SearchParameters,
    flight_count: usize,
    results: &[PricedResult],
) -> String {
    TextReport {
        params,
        flight_count,
        results,
    }
    .to_string()
}

struct TextReport<'a> {
    params: &'a SearchParameters,
    flight_count: usize,
    results: &'a [PricedResult],
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params;
        writeln!(f, "Available flights: {}", self.flight_count)?;
        writeln!(f, "Trip origin: {}", p.origin)?;
        writeln!(f, "Trip destination: {}", p.destination)?;
        writeln!(f, "Bags count: {}", p.bags)?;
        writeln!(f, "Max stops: {}", p.max_stops)?;
        writeln!(f, "Return trip: {}", if p.return_trip { "yes" } else { "no" })?;
        writeln!(f, "Results: {}", self.results.len())?;

        for (rank, result) in self.results.iter().enumerate() {
            writeln!(f)?;

            let mut route = result.origin.to_string();
            for leg in result.itinerary.legs() {
                route.push_str(" -> ");
                route.push_str(leg.destination.as_str());
            }
            writeln!(
                f,
                "#{}  {}  total {}  bags {}/{}  travel {}",
                rank + 1,
                route,
                result.total_price,
                result.bags_count,
                result.bags_allowed,
                format_travel_time(result.travel_time),
            )?;

            for leg in result.itinerary.legs() {
                writeln!(
                    f,
                    "    {:<8} {} {} -> {} {}  base {}  bag {}  max bags {}",
                    leg.flight_no,
                    leg.origin,
                    format_timestamp(&leg.departure),
                    leg.destination,
                    format_timestamp(&leg.arrival),
                    leg.base_price,
                    leg.bag_price,
                    leg.bags_allowed,
                )?;
            }
        }

        Ok(())
    }
}
