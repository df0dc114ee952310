//! Depth-first trip search.
//!
//! Enumerates every chain of flights from the requested origin to the
//! requested destination that respects the stop ceiling and the layover
//! window. The search walks an explicit stack of partial itineraries
//! instead of recursing, so the only limits on it are the ones in
//! [`SearchParameters`] and [`SearchConfig`].

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{AirportCode, Flight, Itinerary};

use super::config::SearchConfig;
use super::rank::{PricedResult, aggregate_results};

/// Error from trip search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The configured branch ceiling was hit before the search finished
    #[error("search expanded more than {limit} partial itineraries; lower the stop count or raise the branch limit")]
    BranchLimitExceeded { limit: usize },
}

/// What to search for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchParameters {
    /// Airport the first leg must depart from.
    pub origin: AirportCode,

    /// Airport the last leg must land at.
    pub destination: AirportCode,

    /// Maximum number of intermediate connections (legs - 1).
    pub max_stops: usize,

    /// Checked bags the traveller wants to bring.
    pub bags: u32,

    /// Accepted and echoed back, but has no effect on the search or on
    /// pricing. A return journey is a second search with origin and
    /// destination swapped.
    pub return_trip: bool,
}

impl SearchParameters {
    /// Create parameters for a direct-only, no-bags search.
    pub fn new(origin: AirportCode, destination: AirportCode) -> Self {
        Self {
            origin,
            destination,
            max_stops: 0,
            bags: 0,
            return_trip: false,
        }
    }

    /// Set the number of checked bags.
    pub fn with_bags(mut self, bags: u32) -> Self {
        self.bags = bags;
        self
    }

    /// Set the maximum number of intermediate connections.
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Set the return-trip flag.
    pub fn with_return_trip(mut self, return_trip: bool) -> Self {
        self.return_trip = return_trip;
        self
    }

    /// Returns the maximum number of legs an itinerary may have.
    pub fn max_legs(&self) -> usize {
        self.max_stops.saturating_add(1)
    }
}

/// Raw output of [`TripSearch::search`], before pricing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Complete itineraries, in depth-first discovery order.
    pub itineraries: Vec<Itinerary>,

    /// Number of partial itineraries taken off the work stack.
    pub branches_explored: usize,
}

/// Priced, filtered and ranked search result.
#[derive(Debug, Clone, PartialEq)]
pub struct TripReport {
    /// Feasible itineraries, cheapest first.
    pub results: Vec<PricedResult>,

    /// Itineraries found before the bag filter was applied.
    pub itineraries_found: usize,

    /// Number of partial itineraries taken off the work stack.
    pub branches_explored: usize,
}

/// Trip search over a fixed list of flights.
pub struct TripSearch<'a> {
    flights: &'a [Arc<Flight>],
    config: &'a SearchConfig,
}

impl<'a> TripSearch<'a> {
    /// Create a new search over `flights`.
    ///
    /// Flight order matters: branches are explored, and itineraries
    /// reported, in the order the flights are given.
    pub fn new(flights: &'a [Arc<Flight>], config: &'a SearchConfig) -> Self {
        Self { flights, config }
    }

    /// Enumerate all itineraries matching `params`.
    ///
    /// A branch is recorded as soon as its last leg lands at the
    /// destination and is not extended past that point. Otherwise every
    /// flight in the list is tried as the next leg, so an itinerary may
    /// pass through the same airport, or take the same flight, more than
    /// once if the layover rules allow it.
    ///
    /// The amount of work grows with `flights.len()` raised to
    /// `max_stops + 1`. Set [`SearchConfig::max_branches`] to turn runaway
    /// searches into an error.
    pub fn search(&self, params: &SearchParameters) -> Result<SearchOutcome, SearchError> {
        let max_legs = params.max_legs();

        // Seeds are pushed in reverse so they pop in input order.
        let mut stack: Vec<Itinerary> = self
            .flights
            .iter()
            .rev()
            .filter(|f| f.origin == params.origin)
            .map(|f| Itinerary::single(f.clone()))
            .collect();

        let mut itineraries = Vec::new();
        let mut branches_explored = 0;

        while let Some(itinerary) = stack.pop() {
            branches_explored += 1;
            if let Some(limit) = self.config.max_branches {
                if branches_explored > limit {
                    return Err(SearchError::BranchLimitExceeded { limit });
                }
            }

            if itinerary.destination() == &params.destination {
                trace!(
                    legs = itinerary.leg_count(),
                    first = %itinerary.first_leg().flight_no,
                    "itinerary reached destination"
                );
                itineraries.push(itinerary);
                continue;
            }

            if itinerary.leg_count() >= max_legs {
                continue;
            }

            let last = itinerary.last_leg();
            for flight in self.flights.iter().rev() {
                if !self.connects(last, flight) {
                    continue;
                }
                if let Ok(next) = itinerary.extended(flight.clone()) {
                    stack.push(next);
                }
            }
        }

        debug!(
            origin = %params.origin,
            destination = %params.destination,
            max_stops = params.max_stops,
            itineraries = itineraries.len(),
            branches_explored,
            "trip search complete"
        );

        Ok(SearchOutcome {
            itineraries,
            branches_explored,
        })
    }

    /// Check whether `next` can follow `prev` within the layover window.
    fn connects(&self, prev: &Flight, next: &Flight) -> bool {
        prev.connection_to(next)
            .is_some_and(|gap| self.config.accepts_connection(gap))
    }
}

/// Search, price and rank itineraries in one call.
///
/// This is the whole pipeline the CLI and the HTTP layer run: enumerate
/// itineraries, drop the ones that can't carry the requested bags, and sort
/// the rest by total price.
pub fn find_trips(
    flights: &[Arc<Flight>],
    params: &SearchParameters,
    config: &SearchConfig,
) -> Result<TripReport, SearchError> {
    debug!(
        flights = flights.len(),
        bags = params.bags,
        return_trip = params.return_trip,
        "finding trips"
    );

    let outcome = TripSearch::new(flights, config).search(params)?;
    let itineraries_found = outcome.itineraries.len();
    let results = aggregate_results(outcome.itineraries, params.bags);

    Ok(TripReport {
        results,
        itineraries_found,
        branches_explored: outcome.branches_explored,
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
