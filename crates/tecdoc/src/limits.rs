//! Limits imposed by the remote catalog service.

/// Maximum number of ids the service accepts in one request.
pub const MAX_IDS_PER_REQUEST: usize = 25;

/// Batch size used when none is configured.
pub const DEFAULT_BATCH_SIZE: usize = MAX_IDS_PER_REQUEST;
