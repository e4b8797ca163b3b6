//! Data attached to an article: attributes, OE numbers, documents, thumbnails.

use crate::catalog::operations::{ARTICLE_DOCUMENTS, ARTICLE_THUMBNAILS};
use crate::client::Client;
use crate::error::Result;
use crate::model::{CanonicalRecord, CanonicalValue, Id, Params, Scope};

/// A technical attribute of an article ("Length: 1025 mm").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleAttribute {
    pub id: Id,
    pub name: String,
    pub short_name: String,
    pub value: String,
    pub unit: String,
    pub value_type: String,
}

impl ArticleAttribute {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            id: record.int("attr_id"),
            name: record.string("attr_name"),
            short_name: record.string("attr_short_name"),
            value: record.string("attr_value"),
            unit: record.string("attr_unit"),
            value_type: record.string("attr_type"),
        }
    }
}

/// An original-equipment number an article replaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ArticleOeNumber {
    pub brand_name: String,
    pub oe_number: String,
}

impl ArticleOeNumber {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            brand_name: record.string("brand_name"),
            oe_number: record.string("oe_number"),
        }
    }
}

/// Attributes, EAN and OE numbers from one `get_assigned_articles_by_ids2_single` record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignedArticle {
    pub attributes: Vec<ArticleAttribute>,
    pub ean_number: Option<String>,
    pub oe_numbers: Vec<ArticleOeNumber>,
}

impl AssignedArticle {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            attributes: record
                .list("article_attributes")
                .iter()
                .map(ArticleAttribute::from_record)
                .collect(),
            ean_number: record
                .get("ean_number")
                .and_then(CanonicalValue::first_text)
                .map(str::to_string),
            oe_numbers: record
                .list("oen_numbers")
                .iter()
                .map(ArticleOeNumber::from_record)
                .collect(),
        }
    }
}

/// A document (PDF, image) attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleDocument {
    pub id: Id,
    pub file_name: String,
    pub type_id: i64,
    pub type_name: String,
}

impl ArticleDocument {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            id: record.int("doc_id"),
            file_name: record.string("doc_file_name"),
            type_id: record.int("doc_type_id"),
            type_name: record.string("doc_type_name"),
        }
    }

    /// Lists the documents of an article.
    pub fn all(client: &Client, scope: &Scope, article_id: Id) -> Result<Vec<ArticleDocument>> {
        let params = scope.params().with("article_id", article_id);
        let records = client.execute(ARTICLE_DOCUMENTS, params)?;
        Ok(records.iter().map(ArticleDocument::from_record).collect())
    }
}

/// A thumbnail image of an article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleThumbnail {
    pub id: Id,
    pub file_name: String,
    pub type_id: i64,
}

impl ArticleThumbnail {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        Self {
            id: record.int("thumb_doc_id"),
            file_name: record.string("thumb_file_name"),
            type_id: record.int("thumb_type"),
        }
    }

    /// Lists the thumbnails of an article. Not localized.
    pub fn all(client: &Client, article_id: Id) -> Result<Vec<ArticleThumbnail>> {
        let records = client.execute(ARTICLE_THUMBNAILS, Params::new().with("article_id", article_id))?;
        Ok(records.iter().map(ArticleThumbnail::from_record).collect())
    }
}
