//! Year/month dates as used by the catalog service.
//!
//! Construction periods are transmitted as packed `YYYYMM` integers
//! (e.g. `199805` for May 1998). This module parses, packs and formats them.

use std::fmt;

/// Error type for `YYYYMM` parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub message: String,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DateParseError {}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year/month, validating the month.
    pub fn new(year: i32, month: u32) -> Result<Self, DateParseError> {
        if !(1..=12).contains(&month) {
            return Err(DateParseError {
                message: format!("Invalid month: {}", month),
            });
        }
        if !(1..=9999).contains(&year) {
            return Err(DateParseError {
                message: format!("Invalid year: {}", year),
            });
        }
        Ok(Self { year, month })
    }

    /// Splits a packed `YYYYMM` integer.
    pub fn from_packed(packed: i64) -> Result<Self, DateParseError> {
        if packed <= 0 {
            return Err(DateParseError {
                message: format!("Invalid YYYYMM value: {}", packed),
            });
        }
        let year = i32::try_from(packed / 100).map_err(|_| DateParseError {
            message: format!("Invalid YYYYMM value: {}", packed),
        })?;
        let month = (packed % 100) as u32;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Packs back into a `YYYYMM` integer.
    pub fn packed(&self) -> i64 {
        i64::from(self.year) * 100 + i64::from(self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parses a `YYYYMM` string (surrounding whitespace allowed).
pub fn parse_year_month(s: &str) -> Result<YearMonth, DateParseError> {
    let trimmed = s.trim();
    if trimmed.len() != 6 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError {
            message: format!("Invalid YYYYMM value: {}", s),
        });
    }
    let packed: i64 = trimmed.parse().map_err(|_| DateParseError {
        message: format!("Invalid YYYYMM value: {}", s),
    })?;
    YearMonth::from_packed(packed)
}
