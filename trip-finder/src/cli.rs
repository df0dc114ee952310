//! Command-line interface.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::AirportCode;
use crate::planner::{SearchConfig, SearchParameters};

#[derive(Debug, Parser)]
#[command(name = "trip-finder")]
#[command(about = "Find flight itineraries in a CSV flight table", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search a flight table and print the results
    Search(SearchArgs),
    /// Serve searches over HTTP
    Serve(ServeArgs),
}

/// Output format for `search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// Human-readable summary
    Text,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// CSV flight table
    pub flights: PathBuf,

    /// Origin airport code
    #[arg(value_parser = AirportCode::parse_normalized)]
    pub origin: AirportCode,

    /// Destination airport code
    #[arg(value_parser = AirportCode::parse_normalized)]
    pub destination: AirportCode,

    /// Number of checked bags
    #[arg(long, default_value_t = 0)]
    pub bags: u32,

    /// Maximum number of intermediate connections
    #[arg(long, default_value_t = 0)]
    pub stops: usize,

    /// Mark the search as a return trip (accepted, does not change results)
    #[arg(long = "return")]
    pub return_trip: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// CSV flight table
    pub flights: PathBuf,

    /// Address to listen on
    #[arg(long, env = "TRIP_FINDER_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Search tuning shared by both subcommands.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Shortest acceptable layover, in minutes
    #[arg(long, default_value_t = SearchConfig::default().min_connection_mins)]
    pub min_connection_mins: i64,

    /// Longest acceptable layover, in minutes
    #[arg(long, default_value_t = SearchConfig::default().max_connection_mins)]
    pub max_connection_mins: i64,

    /// Fail the search after expanding this many partial itineraries
    #[arg(long)]
    pub max_branches: Option<usize>,
}

impl ConfigArgs {
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig::new(
            self.min_connection_mins,
            self.max_connection_mins,
            self.max_branches,
        )
    }
}

impl SearchArgs {
    pub fn to_params(&self) -> SearchParameters {
        SearchParameters::new(self.origin, self.destination)
            .with_bags(self.bags)
            .with_max_stops(self.stops)
            .with_return_trip(self.return_trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trip-finder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_defaults() {
        let Command::Search(args) = parse(&["search", "flights.csv", "wiw", "RFZ"]).command else {
            panic!("expected search");
        };

        assert_eq!(args.flights, PathBuf::from("flights.csv"));
        assert_eq!(args.origin.as_str(), "WIW");
        assert_eq!(args.format, Format::Json);

        let params = args.to_params();
        assert_eq!(params.bags, 0);
        assert_eq!(params.max_stops, 0);
        assert!(!params.return_trip);
        assert_eq!(args.config.to_config(), SearchConfig::default());
    }

    #[test]
    fn search_flags() {
        let Command::Search(args) = parse(&[
            "search",
            "flights.csv",
            "WIW",
            "RFZ",
            "--bags",
            "2",
            "--stops",
            "3",
            "--return",
            "--format",
            "text",
            "--min-connection-mins",
            "30",
            "--max-connection-mins",
            "240",
            "--max-branches",
            "5000",
        ])
        .command
        else {
            panic!("expected search");
        };

        let params = args.to_params();
        assert_eq!(params.bags, 2);
        assert_eq!(params.max_stops, 3);
        assert!(params.return_trip);
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.config.to_config(), SearchConfig::new(30, 240, Some(5000)));
    }

    #[test]
    fn invalid_airport_is_rejected() {
        let result =
            Cli::try_parse_from(["trip-finder", "search", "flights.csv", "WIWW", "RFZ"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_address() {
        let Command::Serve(args) = parse(&["serve", "flights.csv", "--addr", "0.0.0.0:8080"]).command
        else {
            panic!("expected serve");
        };
        assert_eq!(args.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }
}
