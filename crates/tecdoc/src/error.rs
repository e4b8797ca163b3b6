//! Error types for requests, batching and configuration.
//!
//! Every hard failure propagates to the caller unchanged; nothing here is
//! retried. Lenient field coercion in [`crate::catalog`] is not an error and
//! has no variant.

use thiserror::Error;

use crate::model::ValueKind;

/// Error categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The transport could not complete the remote call.
    TransportFailure,
    /// The response tree did not have the expected wrapper/record shape.
    UnexpectedShape,
    /// One chunk of a batched id request failed.
    BatchFailure,
    /// Client configuration was rejected.
    InvalidConfig,
}

impl ErrorKind {
    /// Returns a stable identifier (e.g., "transport_failure").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::TransportFailure => "transport_failure",
            ErrorKind::UnexpectedShape => "unexpected_shape",
            ErrorKind::BatchFailure => "batch_failure",
            ErrorKind::InvalidConfig => "invalid_config",
        }
    }
}

/// Failure reported by a [`crate::transport::Transport`] implementation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Mismatch between a response tree and the shape a caller expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("response has no `{expected}` element")]
    MissingElement { expected: &'static str },

    #[error("expected a record collection, found {found}")]
    NotACollection { found: ValueKind },

    #[error("expected at least one record, found none")]
    NoRecords,
}

/// Failure of a single logical operation call.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{operation}: transport failure: {source}")]
    Transport {
        operation: String,
        #[source]
        source: TransportError,
    },

    #[error("{operation}: unexpected response shape: {source}")]
    UnexpectedShape {
        operation: String,
        #[source]
        source: ShapeError,
    },
}

impl RequestError {
    /// Returns the operation name the failed request was issued for.
    pub fn operation(&self) -> &str {
        match self {
            RequestError::Transport { operation, .. }
            | RequestError::UnexpectedShape { operation, .. } => operation,
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::Transport { .. } => ErrorKind::TransportFailure,
            RequestError::UnexpectedShape { .. } => ErrorKind::UnexpectedShape,
        }
    }
}

/// First chunk failure of a batched id request.
///
/// `chunk_index` is 0-based; chunks after it were never issued.
#[derive(Debug, Error)]
#[error("batch chunk {chunk_index} of {chunk_count} failed: {source}")]
pub struct BatchError {
    pub chunk_index: usize,
    pub chunk_count: usize,
    #[source]
    pub source: RequestError,
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("batch size {size} outside 1..={max}")]
    BatchSizeOutOfRange { size: usize, max: usize },
}

/// Crate-level error returned by catalog entities.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Request(e) => e.kind(),
            Error::Batch(_) => ErrorKind::BatchFailure,
            Error::Config(_) => ErrorKind::InvalidConfig,
        }
    }
}

/// Result alias for catalog operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
