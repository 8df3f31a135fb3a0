//! Application state management

use fokal::search::SearchEngine;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Debug)]
pub struct AppState {
    /// Fokal search engine
    pub engine: SearchEngine,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(engine: SearchEngine, config: ServerConfig) -> Self {
        Self { engine, config }
    }
}
