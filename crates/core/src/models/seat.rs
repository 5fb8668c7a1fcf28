//! Seat tokens and assignments
//!
//! A seat token is a column letter ('A'.. left to right) immediately
//! followed by a 1-based row number, e.g. "C4". Row 0 / column 0 is "A1".
//! Tokens are case-insensitive on input and normalized to uppercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker used when no empty slot was available for a placeable record.
pub const WAITING_LABEL: &str = "WAITING";

/// A parsed grid position. Row and column are 0-based internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SeatToken {
    pub row: usize,
    pub col: usize,
}

impl SeatToken {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for SeatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + (self.col % 26) as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

impl FromStr for SeatToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(|| "empty seat token".to_string())?;
        if !letter.is_ascii_alphabetic() {
            return Err(format!("seat token must start with a letter: {s:?}"));
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("seat token must end with a row number: {s:?}"));
        }
        let row: usize = digits
            .parse()
            .map_err(|_| format!("row number out of range: {s:?}"))?;
        if row == 0 {
            return Err(format!("row numbers are 1-based: {s:?}"));
        }
        Ok(SeatToken {
            row: row - 1,
            col: (letter.to_ascii_uppercase() as u8 - b'A') as usize,
        })
    }
}

impl From<SeatToken> for String {
    fn from(token: SeatToken) -> String {
        token.to_string()
    }
}

impl TryFrom<String> for SeatToken {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Outcome of a placement run for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SeatAssignment {
    /// Placed at a concrete grid position
    Seat(SeatToken),
    /// No empty slot was available
    Waiting,
}

impl SeatAssignment {
    pub fn token(&self) -> Option<SeatToken> {
        match self {
            SeatAssignment::Seat(t) => Some(*t),
            SeatAssignment::Waiting => None,
        }
    }
}

impl fmt::Display for SeatAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatAssignment::Seat(t) => t.fmt(f),
            SeatAssignment::Waiting => f.write_str(WAITING_LABEL),
        }
    }
}

impl From<SeatAssignment> for String {
    fn from(seat: SeatAssignment) -> String {
        seat.to_string()
    }
}

impl TryFrom<String> for SeatAssignment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().eq_ignore_ascii_case(WAITING_LABEL) {
            Ok(SeatAssignment::Waiting)
        } else {
            s.parse().map(SeatAssignment::Seat)
        }
    }
}
