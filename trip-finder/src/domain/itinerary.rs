//! Itinerary type.
//!
//! An `Itinerary` is an ordered chain of flights from an origin airport to
//! a destination airport. Itineraries are values: extending one returns a
//! new itinerary and leaves the original untouched, which is what lets the
//! trip search hand partial itineraries to independent branches.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError, Flight};

/// A journey made of one or more flights.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of the next)
///
/// Layover windows are a search policy, not an itinerary invariant, and are
/// not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    legs: Vec<Arc<Flight>>,
}

impl Itinerary {
    /// Constructs an itinerary from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `legs` is empty
    /// - Two consecutive legs don't meet at the same airport
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rust_decimal::Decimal;
    /// use trip_finder::domain::{parse_timestamp, AirportCode, Flight, Itinerary};
    ///
    /// let leg = |no: &str, from: &str, to: &str, dep: &str, arr: &str| {
    ///     Arc::new(Flight {
    ///         flight_no: no.into(),
    ///         origin: AirportCode::parse(from).unwrap(),
    ///         destination: AirportCode::parse(to).unwrap(),
    ///         departure: parse_timestamp(dep).unwrap(),
    ///         arrival: parse_timestamp(arr).unwrap(),
    ///         base_price: Decimal::from(50),
    ///         bag_price: Decimal::from(5),
    ///         bags_allowed: 1,
    ///     })
    /// };
    ///
    /// let itinerary = Itinerary::new(vec![
    ///     leg("F1", "AAA", "BBB", "2021-09-01T10:00:00", "2021-09-01T11:00:00"),
    ///     leg("F2", "BBB", "CCC", "2021-09-01T12:15:00", "2021-09-01T13:00:00"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(itinerary.stop_count(), 1);
    /// assert_eq!(itinerary.destination().as_str(), "CCC");
    /// ```
    pub fn new(legs: Vec<Arc<Flight>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for window in legs.windows(2) {
            let arriving = window[0].destination;
            let departing = window[1].origin;
            if arriving != departing {
                return Err(DomainError::NotConnected(arriving, departing));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Constructs a one-leg itinerary.
    pub fn single(flight: Arc<Flight>) -> Self {
        Itinerary { legs: vec![flight] }
    }

    /// Returns a new itinerary with `flight` appended as the next leg.
    ///
    /// `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `flight` doesn't depart from this itinerary's
    /// destination.
    pub fn extended(&self, flight: Arc<Flight>) -> Result<Self, DomainError> {
        let arriving = *self.destination();
        if arriving != flight.origin {
            return Err(DomainError::NotConnected(arriving, flight.origin));
        }

        let mut legs = Vec::with_capacity(self.legs.len() + 1);
        legs.extend(self.legs.iter().cloned());
        legs.push(flight);
        Ok(Itinerary { legs })
    }

    /// Returns all legs in travel order.
    pub fn legs(&self) -> &[Arc<Flight>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the number of intermediate connections (legs - 1).
    pub fn stop_count(&self) -> usize {
        self.legs.len() - 1
    }

    /// Returns the first leg.
    pub fn first_leg(&self) -> &Flight {
        // Non-empty by construction
        &self.legs[0]
    }

    /// Returns the last leg.
    pub fn last_leg(&self) -> &Flight {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> &AirportCode {
        &self.first_leg().origin
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> &AirportCode {
        &self.last_leg().destination
    }

    /// Returns the departure time of the first leg.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.first_leg().departure
    }

    /// Returns the arrival time of the last leg.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.last_leg().arrival
    }

    /// Returns the total travel time, layovers included.
    pub fn travel_time(&self) -> Duration {
        self.arrival_time()
            .signed_duration_since(self.departure_time())
    }

    /// Returns true if this itinerary is a single flight.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_timestamp;
    use rust_decimal::Decimal;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn flight(no: &str, from: &str, to: &str, dep: &str, arr: &str) -> Arc<Flight> {
        Arc::new(Flight {
            flight_no: no.to_string(),
            origin: code(from),
            destination: code(to),
            departure: parse_timestamp(dep).unwrap(),
            arrival: parse_timestamp(arr).unwrap(),
            base_price: Decimal::from(40),
            bag_price: Decimal::from(8),
            bags_allowed: 1,
        })
    }

    fn ab() -> Arc<Flight> {
        flight("F1", "AAA", "BBB", "2021-09-01T10:00:00", "2021-09-01T11:00:00")
    }

    fn bc() -> Arc<Flight> {
        flight("F2", "BBB", "CCC", "2021-09-01T12:15:00", "2021-09-01T13:30:00")
    }

    #[test]
    fn single_leg() {
        let itinerary = Itinerary::single(ab());

        assert_eq!(itinerary.leg_count(), 1);
        assert_eq!(itinerary.stop_count(), 0);
        assert!(itinerary.is_direct());
        assert_eq!(itinerary.origin(), &code("AAA"));
        assert_eq!(itinerary.destination(), &code("BBB"));
        assert_eq!(itinerary.travel_time(), Duration::hours(1));
    }

    #[test]
    fn two_legs_with_layover() {
        let itinerary = Itinerary::new(vec![ab(), bc()]).unwrap();

        assert_eq!(itinerary.leg_count(), 2);
        assert_eq!(itinerary.stop_count(), 1);
        assert!(!itinerary.is_direct());
        assert_eq!(itinerary.origin(), &code("AAA"));
        assert_eq!(itinerary.destination(), &code("CCC"));
        assert_eq!(itinerary.first_leg().flight_no, "F1");
        assert_eq!(itinerary.last_leg().flight_no, "F2");
        // 10:00 -> 13:30, layover included
        assert_eq!(itinerary.travel_time(), Duration::minutes(210));
    }

    #[test]
    fn empty_legs_rejected() {
        assert_eq!(Itinerary::new(vec![]), Err(DomainError::EmptyItinerary));
    }

    #[test]
    fn disconnected_legs_rejected() {
        let cd = flight("F3", "CCC", "DDD", "2021-09-01T12:15:00", "2021-09-01T13:30:00");

        assert_eq!(
            Itinerary::new(vec![ab(), cd]),
            Err(DomainError::NotConnected(code("BBB"), code("CCC")))
        );
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let base = Itinerary::single(ab());
        let longer = base.extended(bc()).unwrap();

        assert_eq!(base.leg_count(), 1);
        assert_eq!(longer.leg_count(), 2);
        assert_eq!(longer.legs()[0], base.legs()[0]);
    }

    #[test]
    fn sibling_extensions_are_independent() {
        let base = Itinerary::single(ab());
        let bd = flight("F4", "BBB", "DDD", "2021-09-01T13:00:00", "2021-09-01T14:00:00");

        let via_c = base.extended(bc()).unwrap();
        let via_d = base.extended(bd).unwrap();

        assert_eq!(via_c.destination(), &code("CCC"));
        assert_eq!(via_d.destination(), &code("DDD"));
        assert_eq!(base.destination(), &code("BBB"));
    }

    #[test]
    fn extended_rejects_unchained_flight() {
        let base = Itinerary::single(ab());
        let cd = flight("F3", "CCC", "DDD", "2021-09-01T12:15:00", "2021-09-01T13:30:00");

        assert_eq!(
            base.extended(cd),
            Err(DomainError::NotConnected(code("BBB"), code("CCC")))
        );
    }

    #[test]
    fn same_flight_may_repeat() {
        // Out and back on a loop: nothing in the itinerary forbids revisits
        let ba = flight("F5", "BBB", "AAA", "2021-09-01T12:00:00", "2021-09-01T13:00:00");
        let itinerary = Itinerary::new(vec![ab(), ba, ab()]).unwrap();

        assert_eq!(itinerary.leg_count(), 3);
        assert_eq!(itinerary.destination(), &code("BBB"));
    }
}
