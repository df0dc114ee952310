//! Domain error types.
//!
//! These errors represent invariant violations when assembling domain
//! values. They are distinct from table-parsing and HTTP errors.

use super::AirportCode;

/// Domain-level errors for itinerary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs don't meet at the same airport
    #[error("leg arriving at {0} does not connect to leg departing {1}")]
    NotConnected(AirportCode, AirportCode),
}
