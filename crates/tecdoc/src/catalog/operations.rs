//! Operation names and fixed parameter values used by the catalog entities.

/// Article search across all number types.
pub const ARTICLE_DIRECT_SEARCH: &str = "get_article_direct_search_all_numbers2";
/// Attributes, EAN and OE numbers of one article.
pub const ASSIGNED_ARTICLES: &str = "get_assigned_articles_by_ids2_single";
pub const ARTICLE_DOCUMENTS: &str = "get_article_documents";
pub const ARTICLE_THUMBNAILS: &str = "get_thumbnails_by_article_id";
/// Manufacturers of vehicles an article is linked to.
pub const LINKED_MANUFACTURERS: &str = "get_article_linked_all_linking_target_manufacturer";
/// Linking targets (vehicles) of an article.
pub const LINKED_TARGETS: &str = "get_article_linked_all_linking_target_2";
/// Vehicle details by id; accepts at most 25 ids per call.
pub const VEHICLES_BY_IDS: &str = "get_vehicle_by_ids_2";
pub const VEHICLE_MODELS: &str = "get_vehicle_models3";
pub const VEHICLE_MANUFACTURERS: &str = "get_vehicle_manufacturers3";
pub const LANGUAGES: &str = "get_languages";

/// Linking target type for passenger cars.
pub const TARGET_PASSENGER_CAR: &str = "C";
/// Linking target type matching any target.
pub const TARGET_UNIVERSAL: &str = "U";
/// `linking_target_id` value matching every target.
pub const ALL_TARGETS: i64 = -1;
