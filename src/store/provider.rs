use std::fmt;

use async_trait::async_trait;

use super::types::{ModuleSummary, SaveRequest};

/// Errors that can occur while talking to the module server.
#[derive(Debug)]
pub enum StoreError {
    /// Store misconfigured (bad base URL, client could not be built).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Server answered with a body we could not parse.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Config(msg) => write!(f, "config error: {msg}"),
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Api { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            StoreError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence collaborator: where the index comes from and saves go to.
#[async_trait]
pub trait ModuleStore: Send + Sync {
    /// Returns the name of the store.
    fn name(&self) -> &str;

    /// Loads the full module index. Idempotent, safe to call repeatedly.
    async fn fetch_index(&self) -> Result<Vec<ModuleSummary>, StoreError>;

    /// Persists one module.
    async fn save_module(&self, request: SaveRequest) -> Result<(), StoreError>;

    /// Asks the server process to exit.
    async fn stop_server(&self) -> Result<(), StoreError>;
}
