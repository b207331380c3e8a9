pub mod board;
pub mod config;
pub mod directory;
pub mod rest;

use std::sync::Arc;

use config::ServerConfig;
use directory::AccountDirectory;

/// Shared application state passed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// Account directory behind its storage seam.
    pub directory: AccountDirectory,
    pub started_at: std::time::Instant,
}

impl AppContext {
    /// Context over the in-memory account store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            directory: AccountDirectory::in_memory(),
            started_at: std::time::Instant::now(),
        }
    }
}
