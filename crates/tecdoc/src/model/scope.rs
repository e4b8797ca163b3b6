//! Locale context carried by catalog entities.

use crate::model::Params;

/// Language and country an entity was fetched under.
///
/// Lazy lookups issued by an entity reuse its scope so that derived data is
/// localized the same way as the entity itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Scope {
    /// ISO 639 language code.
    pub lang: String,
    /// ISO 3166 country code.
    pub country: String,
}

impl Scope {
    pub fn new(lang: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            country: country.into(),
        }
    }

    /// Returns `{lang, country}` as request parameters.
    pub fn params(&self) -> Params {
        Params::new()
            .with("lang", self.lang.as_str())
            .with("country", self.country.as_str())
    }
}
