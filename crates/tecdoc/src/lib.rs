//! TecDoc: client-side access layer for the TecDoc parts catalog web service.
//!
//! This crate turns the service's loosely structured response trees into
//! uniform records, executes operations through a pluggable transport, splits
//! long id lists into service-sized batches, and exposes catalog entities
//! (articles, vehicles, manufacturers) whose expensive fields are fetched
//! lazily and cached.
//!
//! # Overview
//!
//! A request flows through these layers:
//! - **Transport**: performs the remote call and returns a [`RawNode`] tree
//! - **Executor**: locates the `data` element and normalizes it
//! - **Normalizer**: maps the tree to [`CanonicalValue`]s with snake_case keys
//! - **Catalog**: builds typed entities from canonical records
//!
//! # Quick Start
//!
//! ```rust
//! use tecdoc::{Client, RawNode, ReplayTransport};
//! use tecdoc::catalog::{Article, ArticleSearch, NumberType};
//! use tecdoc::catalog::operations::ARTICLE_DIRECT_SEARCH;
//!
//! let transport = ReplayTransport::new();
//! transport.push_response(
//!     ARTICLE_DIRECT_SEARCH,
//!     RawNode::collection(
//!         "data",
//!         [RawNode::item([
//!             RawNode::leaf("articleId", "1420398"),
//!             RawNode::leaf("articleNo", "31966"),
//!             RawNode::leaf("brandName", "FEBI BILSTEIN"),
//!         ])],
//!     ),
//! );
//!
//! let client = Client::new(transport);
//! let search = ArticleSearch::new("31966", "lv", "lv").number_type(NumberType::Any);
//! let articles = Article::search(&client, &search).unwrap();
//!
//! assert_eq!(articles[0].id, 1420398);
//! assert_eq!(articles[0].brand_name, "FEBI BILSTEIN");
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Catalog entities and their lazily fetched fields
//! - [`client`]: Request execution, batching and client configuration
//! - [`normalize`]: Response tree normalization
//! - [`model`]: Raw trees, canonical values, request parameters
//! - [`transport`]: The transport seam and a replay implementation
//! - [`error`]: Error types
//! - [`limits`]: Limits imposed by the service
//! - [`util`]: Date helpers
//!
//! # Logging
//!
//! Requests and batches emit [`tracing`] events (`debug` per call, `warn` on
//! failures and ignored response content). Install a subscriber to see them.

pub mod catalog;
pub mod client;
pub mod error;
pub mod limits;
pub mod model;
pub mod normalize;
pub mod transport;
pub mod util;

// Re-export commonly used types at crate root
pub use client::{BatchSize, BatchedIdRequester, Client, ClientConfig, RequestExecutor};
pub use error::{BatchError, ConfigError, Error, ErrorKind, RequestError, Result, ShapeError, TransportError};
pub use model::{CanonicalRecord, CanonicalValue, Id, ParamValue, Params, RawNode, Scope, ValueKind, RESULT_ELEMENT};
pub use normalize::{normalize, normalize_collection, snake_case};
pub use transport::{from_fn, Cassette, ReplayTransport, Transport};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
