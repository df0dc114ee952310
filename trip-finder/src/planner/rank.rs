//! Pricing and ranking of search results.
//!
//! Turns bare itineraries into priced results, drops the ones that can't
//! take the requested luggage, and orders the rest cheapest first.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::domain::{AirportCode, Itinerary};

/// An itinerary with its fare and baggage figures worked out.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedResult {
    /// The flights making up the trip
    pub itinerary: Itinerary,
    /// Most bags every leg can carry (the tightest leg wins)
    pub bags_allowed: u32,
    /// Bags the traveller asked for
    pub bags_count: u32,
    /// Sum of base fares plus bag fees for `bags_count` bags on every leg
    pub total_price: Decimal,
    /// First departure to last arrival
    pub travel_time: Duration,
    /// Departure airport of the first leg
    pub origin: AirportCode,
    /// Arrival airport of the last leg
    pub destination: AirportCode,
}

impl PricedResult {
    /// Returns true if the itinerary can carry the requested bags.
    pub fn is_feasible(&self) -> bool {
        self.bags_count <= self.bags_allowed
    }
}

/// Price an itinerary for `bags` checked bags.
///
/// No feasibility filtering happens here; see [`PricedResult::is_feasible`].
pub fn price_itinerary(itinerary: Itinerary, bags: u32) -> PricedResult {
    let mut base_total = Decimal::ZERO;
    let mut bag_total = Decimal::ZERO;
    let mut bags_allowed = u32::MAX;

    for leg in itinerary.legs() {
        base_total += leg.base_price;
        bag_total += leg.bag_price;
        bags_allowed = bags_allowed.min(leg.bags_allowed);
    }

    PricedResult {
        bags_allowed,
        bags_count: bags,
        total_price: base_total + Decimal::from(bags) * bag_total,
        travel_time: itinerary.travel_time(),
        origin: *itinerary.origin(),
        destination: *itinerary.destination(),
        itinerary,
    }
}

/// Rank results by total price, cheapest first.
///
/// The sort is stable: results with equal prices keep the order they were
/// given in, which for search output is the order they were found.
pub fn rank_results(mut results: Vec<PricedResult>) -> Vec<PricedResult> {
    results.sort_by(|a, b| a.total_price.cmp(&b.total_price));
    results
}

/// Price every itinerary, drop those that can't carry `bags`, and rank the
/// rest.
pub fn aggregate_results(itineraries: Vec<Itinerary>, bags: u32) -> Vec<PricedResult> {
    let results = itineraries
        .into_iter()
        .map(|itinerary| price_itinerary(itinerary, bags))
        .filter(PricedResult::is_feasible)
        .collect();

    rank_results(results)
}
