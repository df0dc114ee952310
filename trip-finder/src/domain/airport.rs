//! Airport code types.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code {input:?}: {reason}")]
pub struct InvalidAirportCode {
    input: String,
    reason: &'static str,
}

impl InvalidAirportCode {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A 3-letter airport code, as it appears in the flight table.
///
/// Codes are always 3 uppercase ASCII letters. Only the format is checked;
/// whether the airport exists is not this type's concern.
///
/// # Examples
///
/// ```
/// use trip_finder::domain::AirportCode;
///
/// let wiw = AirportCode::parse("WIW").unwrap();
/// assert_eq!(wiw.as_str(), "WIW");
///
/// // Lowercase is rejected unless normalized first
/// assert!(AirportCode::parse("wiw").is_err());
/// assert_eq!(AirportCode::parse_normalized(" wiw ").unwrap(), wiw);
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("WI").is_err());
/// assert!(AirportCode::parse("WIWW").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode::new(s, "must be exactly 3 characters"));
        }

        if !bytes.iter().all(|b| b.is_ascii_uppercase()) {
            return Err(InvalidAirportCode::new(
                s,
                "must be uppercase ASCII letters A-Z",
            ));
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse user input: surrounding whitespace is trimmed and letters are
    /// upper-cased before validation.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AirportCode {
    type Err = InvalidAirportCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for AirportCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("RFZ").is_ok());
        assert!(AirportCode::parse("WIW").is_ok());
        assert!(AirportCode::parse("AAA").is_ok());
        assert!(AirportCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("rfz").is_err());
        assert!(AirportCode::parse("Rfz").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("R").is_err());
        assert!(AirportCode::parse("RFZZ").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AirportCode::parse("R1Z").is_err());
        assert!(AirportCode::parse("R-Z").is_err());
        assert!(AirportCode::parse("R Z").is_err());
        assert!(AirportCode::parse("RÖ").is_err());
    }

    #[test]
    fn normalized_trims_and_uppercases() {
        let code = AirportCode::parse_normalized("  nrx\n").unwrap();
        assert_eq!(code.as_str(), "NRX");
        assert!(AirportCode::parse_normalized("nr").is_err());
    }

    #[test]
    fn error_names_input() {
        let err = AirportCode::parse("xx").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid airport code \"xx\": must be exactly 3 characters"
        );
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("ESJ").unwrap();
        assert_eq!(format!("{}", code), "ESJ");
        assert_eq!(format!("{:?}", code), "AirportCode(ESJ)");
    }

    #[test]
    fn serializes_as_string() {
        let code = AirportCode::parse("SML").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"SML\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase input is accepted only through normalization
        #[test]
        fn lowercase_needs_normalizing(s in "[a-z]{3}") {
            prop_assert!(AirportCode::parse(&s).is_err());
            let code = AirportCode::parse_normalized(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(AirportCode::parse(&s).is_err());
        }
    }
}
