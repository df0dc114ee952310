//! Web layer for the trip finder.
//!
//! Provides HTTP endpoints for searching a flight table loaded at startup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
