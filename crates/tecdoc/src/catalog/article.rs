//! Articles and their lazily fetched details.
//!
//! Eager fields come from the search record. Everything else (documents,
//! thumbnails, attributes, OE numbers, linked manufacturers and vehicles) is
//! requested on first access under the article's scope and cached for the
//! lifetime of the instance.

use rustc_hash::FxHashSet;

use crate::catalog::article_data::{
    ArticleAttribute, ArticleDocument, ArticleOeNumber, ArticleThumbnail, AssignedArticle,
};
use crate::catalog::manufacturer::VehicleManufacturer;
use crate::catalog::memo::Memo;
use crate::catalog::operations::{
    ALL_TARGETS, ARTICLE_DIRECT_SEARCH, ASSIGNED_ARTICLES, LINKED_MANUFACTURERS, LINKED_TARGETS,
    TARGET_PASSENGER_CAR, TARGET_UNIVERSAL,
};
use crate::catalog::reference::Brand;
use crate::catalog::search::ArticleSearch;
use crate::catalog::vehicle::Vehicle;
use crate::client::Client;
use crate::error::Result;
use crate::model::{CanonicalRecord, Id, Params, Scope};

/// A catalog article found by [`Article::search`].
#[derive(Debug, Clone)]
pub struct Article {
    pub id: Id,
    pub name: String,
    pub number: String,
    /// Simplified number the search matched on.
    pub search_number: String,
    pub brand_name: String,
    pub brand_number: String,
    pub generic_article_id: i64,
    pub number_type: i64,

    scope: Scope,
    client: Client,

    documents: Memo<Vec<ArticleDocument>>,
    thumbnails: Memo<Vec<ArticleThumbnail>>,
    assigned: Memo<AssignedArticle>,
    linked_manufacturers: Memo<Vec<VehicleManufacturer>>,
    linked_vehicle_ids: Memo<Vec<Id>>,
    linked_vehicles: Memo<Vec<Vehicle>>,
}

impl Article {
    /// Finds articles by any number type, optionally filtered by brand and
    /// generic article.
    pub fn search(client: &Client, search: &ArticleSearch) -> Result<Vec<Article>> {
        let scope = search.scope();
        let records = client.execute(ARTICLE_DIRECT_SEARCH, search.params())?;
        Ok(records
            .iter()
            .map(|record| Article::from_record(client.clone(), scope.clone(), record))
            .collect())
    }

    /// Builds an article from a search record. Unknown fields are ignored.
    pub fn from_record(client: Client, scope: Scope, record: &CanonicalRecord) -> Self {
        Self {
            id: record.int("article_id"),
            name: record.string("article_name"),
            number: record.string("article_no"),
            search_number: record.string("article_search_no"),
            brand_name: record.string("brand_name"),
            brand_number: record.string("brand_no"),
            generic_article_id: record.int("generic_article_id"),
            number_type: record.int("number_type"),
            scope,
            client,
            documents: Memo::new(),
            thumbnails: Memo::new(),
            assigned: Memo::new(),
            linked_manufacturers: Memo::new(),
            linked_vehicle_ids: Memo::new(),
            linked_vehicles: Memo::new(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn brand(&self) -> Brand {
        Brand {
            number: self.brand_number.clone(),
            name: self.brand_name.clone(),
        }
    }

    pub fn documents(&self) -> Result<&[ArticleDocument]> {
        self.documents
            .get_or_try_init(|| ArticleDocument::all(&self.client, &self.scope, self.id))
            .map(Vec::as_slice)
    }

    pub fn thumbnails(&self) -> Result<&[ArticleThumbnail]> {
        self.thumbnails
            .get_or_try_init(|| ArticleThumbnail::all(&self.client, self.id))
            .map(Vec::as_slice)
    }

    pub fn attributes(&self) -> Result<&[ArticleAttribute]> {
        Ok(&self.assigned_article()?.attributes)
    }

    pub fn ean_number(&self) -> Result<Option<&str>> {
        Ok(self.assigned_article()?.ean_number.as_deref())
    }

    pub fn oe_numbers(&self) -> Result<&[ArticleOeNumber]> {
        Ok(&self.assigned_article()?.oe_numbers)
    }

    /// Manufacturers of the passenger cars this article fits.
    pub fn linked_manufacturers(&self) -> Result<&[VehicleManufacturer]> {
        self.linked_manufacturers
            .get_or_try_init(|| self.fetch_linked_manufacturers())
            .map(Vec::as_slice)
    }

    /// Ids of the passenger cars this article fits, first occurrence order,
    /// without duplicates.
    pub fn linked_vehicle_ids(&self) -> Result<&[Id]> {
        self.linked_vehicle_ids
            .get_or_try_init(|| self.fetch_linked_vehicle_ids())
            .map(Vec::as_slice)
    }

    /// Passenger cars this article fits.
    ///
    /// Resolves [`linked_vehicle_ids`](Self::linked_vehicle_ids) first, then
    /// fetches details in batches. The id list stays cached if the detail
    /// fetch fails, so a retry only repeats the detail requests.
    pub fn linked_vehicles(&self) -> Result<&[Vehicle]> {
        self.linked_vehicles
            .get_or_try_init(|| Vehicle::by_ids(&self.client, &self.scope, self.linked_vehicle_ids()?))
            .map(Vec::as_slice)
    }

    fn assigned_article(&self) -> Result<&AssignedArticle> {
        self.assigned.get_or_try_init(|| self.fetch_assigned_article())
    }

    fn fetch_assigned_article(&self) -> Result<AssignedArticle> {
        let params = self
            .scope
            .params()
            .with("linking_target_type", TARGET_UNIVERSAL)
            .with("article_id", self.id)
            .with("attributs", true)
            .with("ean_numbers", true)
            .with("oe_numbers", true);
        let record = self.client.executor().execute_one(ASSIGNED_ARTICLES, params)?;
        Ok(AssignedArticle::from_record(&record))
    }

    fn fetch_linked_manufacturers(&self) -> Result<Vec<VehicleManufacturer>> {
        let params = Params::new()
            .with("country", self.scope.country.as_str())
            .with("linking_target_type", TARGET_PASSENGER_CAR)
            .with("article_id", self.id);
        let records = self.client.execute(LINKED_MANUFACTURERS, params)?;
        Ok(records.iter().map(VehicleManufacturer::from_record).collect())
    }

    fn fetch_linked_vehicle_ids(&self) -> Result<Vec<Id>> {
        let params = self
            .scope
            .params()
            .with("linking_target_type", TARGET_PASSENGER_CAR)
            .with("linking_target_id", ALL_TARGETS)
            .with("article_id", self.id);
        let records = self.client.execute(LINKED_TARGETS, params)?;

        let mut seen = FxHashSet::default();
        Ok(records
            .iter()
            .map(|r| r.int("linking_target_id"))
            .filter(|id| seen.insert(*id))
            .collect())
    }
}
