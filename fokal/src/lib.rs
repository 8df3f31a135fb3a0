//! # Fokal
//!
//! Photo search that answers one query from several independent retrieval
//! signals: full-text relevance, dominant-colour similarity and geographic
//! proximity. Each signal produces its own scored candidate list; Fokal fuses
//! those lists into a single ranking, truncates it to the requested size and
//! hydrates only the surviving photos.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fokal::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConfigBuilder::new().with_catalog_path("photos.json").build()?;
//!     let engine = fokal::init(config)?;
//!
//!     let params = QueryParams::from_pairs([("q", "harbour sunset"), ("hex", "ff8800")]);
//!     for hit in engine.search(&params).await? {
//!         println!("{} {:.3}", hit.id, hit.score);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Activation**: decides which signals a request turns on
//! - **Fusion**: adds scores per photo across signals
//! - **Ranking**: score descending, photo id ascending on ties, truncated
//! - **Hydration**: fetches full records for the final ranking only
//!
//! Signal retrieval and hydration sit behind the traits in [`search::signals`],
//! so any backend can be plugged in. [`catalog::InMemoryCatalog`] is the
//! reference backend used by the server and the tests.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod models;
pub mod search;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::init;

    pub use crate::config::{ConfigBuilder, FokalConfig, LogFormat, LogLevel, SearchConfig};

    pub use crate::models::{DominantColor, GeoPoint, Photo, PhotoId};

    pub use crate::search::{
        ActivatedSignals, FusedScore, QueryParams, ScoredCandidate, SearchEngine, SignalKind,
    };

    pub use crate::catalog::InMemoryCatalog;

    pub use crate::{FokalError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Fokal operations
#[derive(Debug, thiserror::Error)]
pub enum FokalError {
    /// A request parameter is present but cannot be used
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A retrieval signal failed
    #[error("{signal} signal failed: {message}")]
    Signal {
        signal: search::SignalKind,
        message: String,
    },

    /// Photo requested for hydration does not exist
    #[error("Photo {0} not found")]
    NotFound(models::PhotoId),

    /// Error loading or reading the photo catalog
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl FokalError {
    /// Whether the error was caused by the caller's parameters rather than a collaborator
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, FokalError::InvalidParameter(_))
    }
}

impl From<crate::config::ConfigError> for FokalError {
    fn from(err: crate::config::ConfigError) -> Self {
        FokalError::Configuration(err.to_string())
    }
}

/// Result type for Fokal operations
pub type Result<T> = std::result::Result<T, FokalError>;

/// Initialize Fokal with the provided configuration
///
/// Sets up logging from `config.logging`, loads the in-memory catalog named by
/// `config.catalog.path` (an empty catalog when unset) and wires it into a
/// [`search::SearchEngine`] as every signal, the hydrator and the listings.
///
/// # Examples
///
/// ```rust,no_run
/// use fokal::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_catalog_path("./data/catalog.json")
///         .with_default_limit(100)
///         .build()?;
///
///     let engine = init(config)?;
///     Ok(())
/// }
/// ```
pub fn init(config: config::FokalConfig) -> Result<search::SearchEngine> {
    logging::init(&config.logging)?;

    let catalog = match &config.catalog.path {
        Some(path) => catalog::InMemoryCatalog::from_json_file(path, &config.catalog)?,
        None => catalog::InMemoryCatalog::new(Vec::new(), &config.catalog),
    };
    tracing::info!(photos = catalog.len(), "Photo catalog ready");

    Ok(search::SearchEngine::from_backend(
        std::sync::Arc::new(catalog),
        config.search,
    ))
}
