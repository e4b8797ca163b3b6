//! Request parameters.
//!
//! Keys are lower snake case; transports translate them to wire casing.

use std::collections::BTreeMap;

use crate::model::Id;

/// A single request parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<ParamValue>),
    Map(Params),
}

impl ParamValue {
    /// Builds a list of ids, as sent for batched lookups.
    pub fn ids(ids: &[Id]) -> Self {
        ParamValue::List(ids.iter().copied().map(ParamValue::Int).collect())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<u8> for ParamValue {
    fn from(v: u8) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<Params> for ParamValue {
    fn from(v: Params) -> Self {
        ParamValue::Map(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ParamValue::Null, Into::into)
    }
}

/// Ordered parameter map sent as the body of one operation call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a parameter only when `value` is `Some`.
    pub fn with_opt<T: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.insert(key, v);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Copies every entry of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: Params) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Params::new().with("provider", 1i64).with("lang", "en");
        base.merge(Params::new().with("provider", 7i64));
        assert_eq!(base.get("provider"), Some(&ParamValue::Int(7)));
        assert_eq!(base.get("lang").and_then(ParamValue::as_text), Some("en"));
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = Params::new()
            .with_opt("brand_no", None::<i64>)
            .with_opt("generic_article_id", Some(12i64));
        assert!(params.get("brand_no").is_none());
        assert_eq!(params.get("generic_article_id").and_then(ParamValue::as_int), Some(12));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_ids_preserve_order() {
        let value = ParamValue::ids(&[3, 1, 2]);
        let ints: Vec<_> = value.as_list().unwrap().iter().filter_map(ParamValue::as_int).collect();
        assert_eq!(ints, vec![3, 1, 2]);
    }
}
