//! Flight trip finder.
//!
//! Given a table of flights, answers: "what are all the ways to get from
//! here to there within N stops, and which of them can take my bags,
//! cheapest first?"

pub mod cache;
pub mod cli;
pub mod domain;
pub mod logging;
pub mod planner;
pub mod report;
pub mod table;
pub mod web;
