//! Seat codes: `F<row><row>A<seat><seat>`.
//!
//! The textual pattern only admits digits 0..=8, so `F99A01` is malformed
//! while `F61A01` is well-formed but off the ferry. Both end up invalid; the
//! error variant says which check failed.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub const SEAT_CODE_PATTERN: &str = r"^F([0-8]{2})A([0-8]{2})$";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatCodeError {
    #[error("malformed seat code {0:?}")]
    Malformed(String),
    #[error("seat F{row:02}A{seat:02} is outside a {rows}x{seats_per_row} ferry")]
    OutOfBounds {
        row: usize,
        seat: usize,
        rows: usize,
        seats_per_row: usize,
    },
}

fn seat_pattern() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEAT_CODE_PATTERN).ok()).as_ref()
}

/// A syntactically valid seat code. Bounds are checked against a grid later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatCode {
    pub row: usize,
    pub seat: usize,
}

impl SeatCode {
    pub fn new(row: usize, seat: usize) -> Self {
        Self { row, seat }
    }

    pub fn parse(s: &str) -> Result<Self, SeatCodeError> {
        let malformed = || SeatCodeError::Malformed(s.to_owned());
        let caps = seat_pattern()
            .and_then(|re| re.captures(s))
            .ok_or_else(malformed)?;
        let row = caps[1].parse().map_err(|_| malformed())?;
        let seat = caps[2].parse().map_err(|_| malformed())?;
        Ok(Self { row, seat })
    }

    /// Ok if this seat exists on a `rows` x `seats_per_row` ferry.
    pub fn check_bounds(self, rows: usize, seats_per_row: usize) -> Result<Self, SeatCodeError> {
        if self.row < rows && self.seat < seats_per_row {
            Ok(self)
        } else {
            Err(SeatCodeError::OutOfBounds {
                row: self.row,
                seat: self.seat,
                rows,
                seats_per_row,
            })
        }
    }
}

impl FromStr for SeatCode {
    type Err = SeatCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SeatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{:02}A{:02}", self.row, self.seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_codes() {
        assert_eq!(SeatCode::parse("F01A01"), Ok(SeatCode::new(1, 1)));
        assert_eq!(SeatCode::parse("F00A00"), Ok(SeatCode::new(0, 0)));
        assert_eq!("F88A88".parse::<SeatCode>(), Ok(SeatCode::new(88, 88)));
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in [
            "ABC123", "F1A1", "F123A123", "", "G01A01", "F91A01", "F01A91", "f01a01", " F01A01",
            "F01A01 ", "F0AA01",
        ] {
            assert!(
                matches!(SeatCode::parse(bad), Err(SeatCodeError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn bounds_are_separate_from_pattern() {
        let code = SeatCode::parse("F61A01").unwrap();
        assert!(matches!(
            code.check_bounds(60, 20),
            Err(SeatCodeError::OutOfBounds { row: 61, .. })
        ));
        let code = SeatCode::parse("F01A20").unwrap();
        assert!(code.check_bounds(60, 20).is_err());
        let code = SeatCode::parse("F58A18").unwrap();
        assert!(code.check_bounds(60, 20).is_ok());
    }

    #[test]
    fn display_pads_to_two_digits() {
        assert_eq!(SeatCode::new(5, 1).to_string(), "F05A01");
        assert_eq!(SeatCode::parse("F40A10").unwrap().to_string(), "F40A10");
    }
}
