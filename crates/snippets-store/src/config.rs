//! Store configuration

use std::time::Duration;

/// Connection and timeout settings for the backing store
///
/// Every bound here is finite: an operation that cannot obtain a connection
/// or a lock within it fails instead of hanging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// How long a statement waits on a locked database before failing
    pub busy_timeout: Duration,

    /// How long a caller waits for a pooled connection
    pub connection_timeout: Duration,

    /// Upper bound on open connections (file databases only)
    pub max_connections: u32,
}

impl StoreConfig {
    /// Apply the same bound to both the busy handler and pool checkout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self.connection_timeout = timeout;
        self
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_secs(5),
            connection_timeout: Duration::from_secs(5),
            max_connections: 8,
        }
    }
}
