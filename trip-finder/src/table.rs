//! Flight table loading.
//!
//! Reads the CSV flight table the trip finder searches over. The first line
//! is a header and is skipped; columns are read by position:
//!
//! ```text
//! flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed
//! ZH214,WIW,RFZ,2021-09-01T23:20:00,2021-09-02T03:50:00,168.0,12.0,2
//! ```
//!
//! Every row is fully validated here, so the planner only ever sees
//! well-formed flights.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{AirportCode, Flight, parse_timestamp};

/// Column names, in file order.
pub const COLUMNS: [&str; 8] = [
    "flight_no",
    "origin",
    "destination",
    "departure",
    "arrival",
    "base_price",
    "bag_price",
    "bags_allowed",
];

/// Errors from loading a flight table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The file could not be opened
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer failed (bad UTF-8, I/O error mid-read)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row was read but its contents are invalid
    #[error("line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

/// All flights from one table, in file order.
#[derive(Debug, Clone, Default)]
pub struct FlightTable {
    flights: Vec<Arc<Flight>>,
}

impl FlightTable {
    /// Load a table from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        debug!(path = %path.display(), flights = table.len(), "loaded flight table");
        Ok(table)
    }

    /// Load a table from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut flights = Vec::new();
        for record in csv.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            flights.push(Arc::new(parse_row(&record, line)?));
        }

        Ok(Self { flights })
    }

    /// Returns the flights in file order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Consumes the table, returning its flights.
    pub fn into_flights(self) -> Vec<Arc<Flight>> {
        self.flights
    }

    /// Returns the number of flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if the table has no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

fn invalid(line: u64, reason: impl Into<String>) -> TableError {
    TableError::InvalidRow {
        line,
        reason: reason.into(),
    }
}

/// Parse one data row into a flight.
fn parse_row(record: &StringRecord, line: u64) -> Result<Flight, TableError> {
    if record.len() != COLUMNS.len() {
        return Err(invalid(
            line,
            format!("expected {} columns, found {}", COLUMNS.len(), record.len()),
        ));
    }
    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let flight_no = field(0);
    if flight_no.is_empty() {
        return Err(invalid(line, "flight_no is empty"));
    }

    let origin = AirportCode::parse(field(1)).map_err(|e| invalid(line, format!("origin: {e}")))?;
    let destination =
        AirportCode::parse(field(2)).map_err(|e| invalid(line, format!("destination: {e}")))?;

    let departure =
        parse_timestamp(field(3)).map_err(|e| invalid(line, format!("departure: {e}")))?;
    let arrival = parse_timestamp(field(4)).map_err(|e| invalid(line, format!("arrival: {e}")))?;
    if arrival <= departure {
        return Err(invalid(line, "arrival must be after departure"));
    }

    let base_price = parse_price(field(5), COLUMNS[5], line)?;
    let bag_price = parse_price(field(6), COLUMNS[6], line)?;

    let bags_allowed = field(7).parse::<u32>().map_err(|_| {
        invalid(
            line,
            format!("bags_allowed: {:?} is not a non-negative integer", field(7)),
        )
    })?;

    Ok(Flight {
        flight_no: flight_no.to_string(),
        origin,
        destination,
        departure,
        arrival,
        base_price,
        bag_price,
        bags_allowed,
    })
}

fn parse_price(s: &str, column: &str, line: u64) -> Result<Decimal, TableError> {
    let price = Decimal::from_str(s)
        .map_err(|_| invalid(line, format!("{column}: {s:?} is not a decimal number")))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid(line, format!("{column}: {s:?} is negative")));
    }
    Ok(price)
}
