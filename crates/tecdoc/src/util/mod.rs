//! Utility modules.

pub mod datetime;

pub use datetime::{parse_year_month, DateParseError, YearMonth};
