//! Client configuration.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::limits::{DEFAULT_BATCH_SIZE, MAX_IDS_PER_REQUEST};

/// Number of ids sent per batched request, within `1..=MAX_IDS_PER_REQUEST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchSize(usize);

impl BatchSize {
    /// Validates a batch size against the service limit.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_IDS_PER_REQUEST {
            return Err(ConfigError::BatchSizeOutOfRange {
                size,
                max: MAX_IDS_PER_REQUEST,
            });
        }
        Ok(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(DEFAULT_BATCH_SIZE)
    }
}

/// Settings for a [`crate::Client`].
///
/// Deserializes from any serde format; missing keys take their defaults.
///
/// ```rust
/// use tecdoc::ClientConfig;
///
/// let config: ClientConfig = serde_json::from_str(r#"{"provider": 123}"#).unwrap();
/// assert_eq!(config.provider, Some(123));
/// assert_eq!(config.batch_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Provider id merged into every request body.
    pub provider: Option<i64>,
    /// Ids per batched request.
    pub batch_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            provider: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: i64) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Checks every setting and returns the validated batch size.
    pub fn validate(&self) -> Result<BatchSize, ConfigError> {
        BatchSize::new(self.batch_size)
    }
}
