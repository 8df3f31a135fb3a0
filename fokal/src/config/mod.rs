//! Configuration system for Fokal.
//!
//! Configuration is layered: built-in defaults, then an optional file
//! (TOML, YAML or JSON), then `FOKAL_` environment variables. Every source is
//! validated before use.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "fokal.toml",
    "fokal.yaml",
    "fokal.yml",
    "fokal.json",
    ".fokal/config.toml",
    ".fokal/config.yaml",
    ".fokal/config.yml",
    ".fokal/config.json",
];

/// Environment variable prefix for Fokal configuration
pub const ENV_PREFIX: &str = "FOKAL_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
