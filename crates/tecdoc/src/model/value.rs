//! Canonical values produced by the normalizer.
//!
//! A response tree is reduced to four shapes: absent, text, a nested record,
//! or a list of records. Numeric and date interpretation is left to callers.

use std::collections::BTreeMap;
use std::fmt;

/// Normalized field value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CanonicalValue {
    /// Element without children and with empty or absent text.
    #[default]
    Null,

    /// Raw text content, untrimmed.
    Text(String),

    /// Element with children but no grouping wrapper.
    Record(CanonicalRecord),

    /// Element containing a grouping wrapper.
    List(Vec<CanonicalRecord>),
}

/// Discriminant of a [`CanonicalValue`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Text,
    Record,
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Text => "text",
            ValueKind::Record => "record",
            ValueKind::List => "list",
        };
        f.write_str(name)
    }
}

impl CanonicalValue {
    /// Returns the discriminant.
    pub fn kind(&self) -> ValueKind {
        match self {
            CanonicalValue::Null => ValueKind::Null,
            CanonicalValue::Text(_) => ValueKind::Text,
            CanonicalValue::Record(_) => ValueKind::Record,
            CanonicalValue::List(_) => ValueKind::List,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CanonicalValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CanonicalValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&CanonicalRecord> {
        match self {
            CanonicalValue::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[CanonicalRecord]> {
        match self {
            CanonicalValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the first text value found depth-first, visiting fields in
    /// name order (not response order).
    ///
    /// Single-field wrappers like `{ean_number: [{ean_number: "..."}]}` are
    /// unwrapped this way.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            CanonicalValue::Null => None,
            CanonicalValue::Text(s) => Some(s),
            CanonicalValue::Record(r) => r.values().find_map(CanonicalValue::first_text),
            CanonicalValue::List(l) => l
                .iter()
                .flat_map(CanonicalRecord::values)
                .find_map(CanonicalValue::first_text),
        }
    }
}

impl From<&str> for CanonicalValue {
    fn from(s: &str) -> Self {
        CanonicalValue::Text(s.to_string())
    }
}

impl From<String> for CanonicalValue {
    fn from(s: String) -> Self {
        CanonicalValue::Text(s)
    }
}

impl From<CanonicalRecord> for CanonicalValue {
    fn from(r: CanonicalRecord) -> Self {
        CanonicalValue::Record(r)
    }
}

impl From<Vec<CanonicalRecord>> for CanonicalValue {
    fn from(l: Vec<CanonicalRecord>) -> Self {
        CanonicalValue::List(l)
    }
}

/// Normalized record: snake-case field name to value.
///
/// Fields are kept sorted by name; response order is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalRecord {
    fields: BTreeMap<String, CanonicalValue>,
}

impl CanonicalRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any earlier value under the same name.
    ///
    /// Returns the replaced value. Repeated names in a response therefore
    /// resolve to the last occurrence.
    pub fn insert(&mut self, name: impl Into<String>, value: CanonicalValue) -> Option<CanonicalValue> {
        self.fields.insert(name.into(), value)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CanonicalValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&CanonicalValue> {
        self.fields.get(name)
    }

    /// Returns the text of a field, if it holds text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(CanonicalValue::as_text)
    }

    /// Returns a nested record field.
    pub fn record(&self, name: &str) -> Option<&CanonicalRecord> {
        self.get(name).and_then(CanonicalValue::as_record)
    }

    /// Returns a list field, or an empty slice when absent or not a list.
    pub fn list(&self, name: &str) -> &[CanonicalRecord] {
        self.get(name).and_then(CanonicalValue::as_list).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CanonicalValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &CanonicalValue> {
        self.fields.values()
    }
}

impl IntoIterator for CanonicalRecord {
    type Item = (String, CanonicalValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, CanonicalValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, CanonicalValue)> for CanonicalRecord {
    fn from_iter<I: IntoIterator<Item = (K, CanonicalValue)>>(iter: I) -> Self {
        let mut record = CanonicalRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
