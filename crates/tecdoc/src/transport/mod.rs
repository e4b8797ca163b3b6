//! Transport seam.
//!
//! A transport performs the actual remote invocation (session, provider,
//! proxy and authentication handling included) and returns the raw response
//! tree. The core never dials the network itself.

pub mod replay;

pub use replay::{Cassette, Interaction, RecordedCall, ReplayTransport};

use std::sync::Arc;

use crate::error::TransportError;
use crate::model::{Params, RawNode};

/// Performs one remote operation call.
///
/// Operation names and parameter keys are lower snake case
/// (`get_article_direct_search_all_numbers2`, `article_id`); implementations
/// translate them to the wire casing the service expects. Implementations
/// must not retry on their own.
pub trait Transport: Send + Sync {
    fn call(&self, operation: &str, body: &Params) -> Result<RawNode, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn call(&self, operation: &str, body: &Params) -> Result<RawNode, TransportError> {
        (**self).call(operation, body)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(&self, operation: &str, body: &Params) -> Result<RawNode, TransportError> {
        (**self).call(operation, body)
    }
}

/// Transport backed by a closure. Created with [`from_fn`].
pub struct FnTransport<F>(F);

/// Wraps a closure as a [`Transport`].
///
/// ```rust
/// use tecdoc::{Client, RawNode};
/// use tecdoc::transport::from_fn;
///
/// let client = Client::new(from_fn(|_operation, _body| Ok(RawNode::new("data"))));
/// assert!(client.execute("get_languages", Default::default()).unwrap().is_empty());
/// ```
pub fn from_fn<F>(f: F) -> FnTransport<F>
where
    F: Fn(&str, &Params) -> Result<RawNode, TransportError> + Send + Sync,
{
    FnTransport(f)
}

impl<F> Transport for FnTransport<F>
where
    F: Fn(&str, &Params) -> Result<RawNode, TransportError> + Send + Sync,
{
    fn call(&self, operation: &str, body: &Params) -> Result<RawNode, TransportError> {
        (self.0)(operation, body)
    }
}

impl<F> std::fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnTransport")
    }
}
