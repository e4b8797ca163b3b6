//! Brands and languages.

use crate::catalog::operations::LANGUAGES;
use crate::client::Client;
use crate::error::Result;
use crate::model::{CanonicalRecord, Params};

/// Article brand (supplier).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Brand {
    pub number: String,
    pub name: String,
}

/// A language supported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Language {
    /// ISO 639 code.
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            code: record.string("language_code"),
            name: record.string("language_name"),
        }
    }

    /// Lists languages, with names localized in `lang`.
    pub fn all(client: &Client, lang: &str) -> Result<Vec<Language>> {
        let records = client.execute(LANGUAGES, Params::new().with("lang", lang))?;
        Ok(records.iter().map(Language::from_record).collect())
    }
}
