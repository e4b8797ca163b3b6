//! Request execution against a transport.
//!
//! [`Client`] bundles a [`RequestExecutor`] with the batch settings used for
//! long id lists. It is constructed explicitly from a transport and passed to
//! catalog entry points; there is no process-wide client.

pub mod batch;
pub mod config;
pub mod executor;

pub use batch::{partition, BatchedIdRequester, IdBatch};
pub use config::{BatchSize, ClientConfig};
pub use executor::RequestExecutor;

use std::sync::Arc;

use crate::error::{BatchError, ConfigError, RequestError};
use crate::model::{CanonicalRecord, Id, Params};
use crate::transport::Transport;

/// Handle used by catalog entities to issue requests.
///
/// Cloning is cheap; clones share the transport.
#[derive(Debug, Clone)]
pub struct Client {
    executor: RequestExecutor,
    batch_size: BatchSize,
}

impl Client {
    /// Creates a client with default settings.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_executor(RequestExecutor::new(Arc::new(transport)), BatchSize::default())
    }

    /// Creates a client from validated configuration.
    pub fn from_config(transport: impl Transport + 'static, config: &ClientConfig) -> Result<Self, ConfigError> {
        Self::from_shared(Arc::new(transport), config)
    }

    /// Like [`from_config`](Self::from_config) for an already shared transport.
    pub fn from_shared(transport: Arc<dyn Transport>, config: &ClientConfig) -> Result<Self, ConfigError> {
        let batch_size = config.validate()?;
        let mut executor = RequestExecutor::new(transport);
        if let Some(provider) = config.provider {
            executor = executor.with_provider(provider);
        }
        Ok(Self::from_executor(executor, batch_size))
    }

    pub fn from_executor(executor: RequestExecutor, batch_size: BatchSize) -> Self {
        Self { executor, batch_size }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Returns a batch requester sharing this client's transport.
    pub fn batched(&self) -> BatchedIdRequester {
        BatchedIdRequester::new(self.executor.clone(), self.batch_size)
    }

    /// See [`RequestExecutor::execute`].
    pub fn execute(&self, operation: &str, params: Params) -> Result<Vec<CanonicalRecord>, RequestError> {
        self.executor.execute(operation, params)
    }

    /// See [`BatchedIdRequester::fetch_by_ids`].
    pub fn fetch_by_ids(
        &self,
        operation: &str,
        ids: &[Id],
        template: &Params,
        id_field: &str,
    ) -> Result<Vec<CanonicalRecord>, BatchError> {
        self.batched().fetch_by_ids(operation, ids, template, id_field)
    }
}
