//! Lenient field coercion for eager entity fields.
//!
//! Coercion never fails: malformed or missing input yields `0`, `""`,
//! `false` or `None`. Hard failures are reserved for transport and shape
//! errors.

use crate::model::CanonicalRecord;
use crate::util::{parse_year_month, YearMonth};

/// Parses the leading integer of `text`, or returns 0.
///
/// Leading whitespace and a sign are accepted, trailing garbage is ignored
/// (`"12 kW"` → 12). Values that overflow `i64` become 0.
pub fn int(text: Option<&str>) -> i64 {
    let Some(text) = text else { return 0 };
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
    let Ok(value) = digits[..end].parse::<i64>() else { return 0 };
    if negative { -value } else { value }
}

/// Returns `text` as an owned string, or `""`.
pub fn string(text: Option<&str>) -> String {
    text.unwrap_or_default().to_string()
}

/// Interprets `"true"`, `"1"`, `"yes"` and `"y"` (any case) as true.
pub fn flag(text: Option<&str>) -> bool {
    matches!(
        text.map(|t| t.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "y")
    )
}

/// Parses a packed `YYYYMM` value, or returns `None`.
pub fn year_month(text: Option<&str>) -> Option<YearMonth> {
    text.and_then(|t| parse_year_month(t).ok())
}

impl CanonicalRecord {
    /// Integer field with [`int`] leniency.
    pub fn int(&self, field: &str) -> i64 {
        int(self.text(field))
    }

    /// Text field, or `""`.
    pub fn string(&self, field: &str) -> String {
        string(self.text(field))
    }

    /// Text field, or `None` when absent or null.
    pub fn opt_string(&self, field: &str) -> Option<String> {
        self.text(field).map(str::to_string)
    }

    /// Boolean field with [`flag`] leniency.
    pub fn flag(&self, field: &str) -> bool {
        flag(self.text(field))
    }

    /// `YYYYMM` field, or `None`.
    pub fn year_month(&self, field: &str) -> Option<YearMonth> {
        year_month(self.text(field))
    }
}
