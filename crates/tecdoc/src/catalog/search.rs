//! Article search parameters.

use crate::model::{Params, Scope};

/// Which number an article search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum NumberType {
    ArticleNumber = 0,
    OeNumber = 1,
    TradeNumber = 2,
    ComparableNumber = 3,
    ReplacementNumber = 4,
    ReplacedNumber = 5,
    EanNumber = 6,
    #[default]
    Any = 10,
}

impl NumberType {
    /// Creates a NumberType from its wire representation.
    pub fn from_u8(v: u8) -> Option<NumberType> {
        match v {
            0 => Some(NumberType::ArticleNumber),
            1 => Some(NumberType::OeNumber),
            2 => Some(NumberType::TradeNumber),
            3 => Some(NumberType::ComparableNumber),
            4 => Some(NumberType::ReplacementNumber),
            5 => Some(NumberType::ReplacedNumber),
            6 => Some(NumberType::EanNumber),
            10 => Some(NumberType::Any),
            _ => None,
        }
    }
}

/// Result ordering of an article search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SortType {
    Brand = 1,
    ProductGroup = 2,
}

impl SortType {
    pub fn from_u8(v: u8) -> Option<SortType> {
        match v {
            1 => Some(SortType::Brand),
            2 => Some(SortType::ProductGroup),
            _ => None,
        }
    }
}

/// Options for [`crate::catalog::Article::search`].
///
/// ```rust
/// use tecdoc::catalog::{ArticleSearch, NumberType, SortType};
///
/// let search = ArticleSearch::new("31966", "lv", "lv")
///     .number_type(NumberType::Any)
///     .sort_type(SortType::Brand);
/// assert!(!search.search_exact);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSearch {
    /// Number to look up; the service simplifies it before matching.
    pub article_number: String,
    pub brand_no: Option<i64>,
    /// ISO 3166 country code.
    pub country: String,
    pub generic_article_id: Option<i64>,
    /// ISO 639 language code.
    pub lang: String,
    pub number_type: NumberType,
    /// Exact match when true, similar-number match otherwise.
    pub search_exact: bool,
    pub sort_type: Option<SortType>,
}

impl ArticleSearch {
    pub fn new(article_number: impl Into<String>, lang: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            article_number: article_number.into(),
            brand_no: None,
            country: country.into(),
            generic_article_id: None,
            lang: lang.into(),
            number_type: NumberType::default(),
            search_exact: false,
            sort_type: None,
        }
    }

    pub fn brand_no(mut self, brand_no: i64) -> Self {
        self.brand_no = Some(brand_no);
        self
    }

    pub fn generic_article_id(mut self, id: i64) -> Self {
        self.generic_article_id = Some(id);
        self
    }

    pub fn number_type(mut self, number_type: NumberType) -> Self {
        self.number_type = number_type;
        self
    }

    pub fn search_exact(mut self, exact: bool) -> Self {
        self.search_exact = exact;
        self
    }

    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = Some(sort_type);
        self
    }

    /// Scope inherited by articles found with these options.
    pub fn scope(&self) -> Scope {
        Scope::new(self.lang.as_str(), self.country.as_str())
    }

    /// Request parameters; unset optional filters are omitted.
    pub fn params(&self) -> Params {
        Params::new()
            .with("article_number", self.article_number.as_str())
            .with_opt("brand_no", self.brand_no)
            .with("country", self.country.as_str())
            .with_opt("generic_article_id", self.generic_article_id)
            .with("lang", self.lang.as_str())
            .with("number_type", self.number_type as u8)
            .with("search_exact", self.search_exact)
            .with_opt("sort_type", self.sort_type.map(|s| s as u8))
    }
}
