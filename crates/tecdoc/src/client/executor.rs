//! Single operation calls.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{RequestError, ShapeError};
use crate::model::{CanonicalRecord, Params, RESULT_ELEMENT};
use crate::normalize::normalize_collection;
use crate::transport::Transport;

/// Issues one logical operation call and normalizes the result set.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    provider: Option<i64>,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl RequestExecutor {
    /// Creates an executor over a transport, without a provider id.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            provider: None,
        }
    }

    /// Sets the provider id merged into every request body.
    pub fn with_provider(mut self, provider: i64) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn provider(&self) -> Option<i64> {
        self.provider
    }

    /// Calls `operation` once and returns its records in response order.
    ///
    /// The body is the provider id (when configured) merged with `params`;
    /// entries in `params` win. The response is searched breadth-first for
    /// the `data` element, which must normalize to a record collection.
    pub fn execute(&self, operation: &str, params: Params) -> Result<Vec<CanonicalRecord>, RequestError> {
        let mut body = Params::new();
        if let Some(provider) = self.provider {
            body.insert("provider", provider);
        }
        body.merge(params);

        debug!(operation, params = body.len(), "dispatching request");

        let root = self.transport.call(operation, &body).map_err(|source| {
            warn!(operation, error = %source, "transport failure");
            RequestError::Transport {
                operation: operation.to_string(),
                source,
            }
        })?;

        let shape_error = |source: ShapeError| {
            warn!(operation, error = %source, "unexpected response shape");
            RequestError::UnexpectedShape {
                operation: operation.to_string(),
                source,
            }
        };

        let data = root
            .into_descendant(RESULT_ELEMENT)
            .ok_or(ShapeError::MissingElement { expected: RESULT_ELEMENT })
            .map_err(shape_error)?;
        let records = normalize_collection(data).map_err(shape_error)?;

        debug!(operation, records = records.len(), "request completed");
        Ok(records)
    }

    /// Calls `operation` and returns its first record.
    ///
    /// An empty result set is reported as [`ShapeError::NoRecords`].
    pub fn execute_one(&self, operation: &str, params: Params) -> Result<CanonicalRecord, RequestError> {
        self.execute(operation, params)?
            .into_iter()
            .next()
            .ok_or_else(|| RequestError::UnexpectedShape {
                operation: operation.to_string(),
                source: ShapeError::NoRecords,
            })
    }
}
