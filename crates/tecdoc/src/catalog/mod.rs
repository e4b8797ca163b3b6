//! Catalog entities built on top of the request layer.
//!
//! Entities are plain structs populated from canonical records. Data that
//! needs another request is fetched on first access through a [`Memo`] and
//! cached for the lifetime of the instance.

pub mod article;
pub mod article_data;
pub mod coerce;
pub mod manufacturer;
pub mod memo;
pub mod operations;
pub mod reference;
pub mod search;
pub mod vehicle;

pub use article::Article;
pub use article_data::{ArticleAttribute, ArticleDocument, ArticleOeNumber, ArticleThumbnail, AssignedArticle};
pub use manufacturer::{ManufacturerQuery, VehicleManufacturer};
pub use memo::Memo;
pub use reference::{Brand, Language};
pub use search::{ArticleSearch, NumberType, SortType};
pub use vehicle::{CarType, Vehicle, VehicleModel, VehicleModelQuery};
