//! Data model types.
//!
//! This module contains the types that flow through a request:
//! - Raw response trees as returned by a transport
//! - Canonical values and records produced by the normalizer
//! - Request parameters
//! - The locale scope retained by catalog entities

pub mod node;
pub mod params;
pub mod scope;
pub mod value;

pub use node::{GROUP_ELEMENT, RESULT_ELEMENT, RawNode};
pub use params::{ParamValue, Params};
pub use scope::Scope;
pub use value::{CanonicalRecord, CanonicalValue, ValueKind};

/// Numeric identifier used by the catalog (articles, vehicles, manufacturers).
pub type Id = i64;
