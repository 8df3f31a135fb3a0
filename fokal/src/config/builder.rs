//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::Path;

/// Builder for creating FokalConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: FokalConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: FokalConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: FokalConfig) -> Self {
        Self { config }
    }

    /// Set the JSON file the reference catalog is loaded from.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.catalog.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the maximum RGB distance at which a dominant colour still matches.
    pub fn with_color_max_distance(mut self, distance: f64) -> Self {
        self.config.catalog.color_max_distance = distance;
        self
    }

    /// Set the limit used when a request has none.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.config.search.default_limit = limit;
        self
    }

    /// Set the largest limit a request may ask for.
    pub fn with_max_limit(mut self, limit: usize) -> Self {
        self.config.search.max_limit = limit;
        self
    }

    /// Set the fallback pixel fraction threshold for colour search.
    pub fn with_default_pixel_fraction(mut self, fraction: f64) -> Self {
        self.config.search.default_pixel_fraction = fraction;
        self
    }

    /// Query each signal for `limit * factor` candidates before fusion.
    pub fn with_signal_oversample(mut self, factor: usize) -> Self {
        self.config.search.signal_oversample = factor;
        self
    }

    /// Allow up to `concurrency` hydration calls in flight.
    pub fn with_hydration_concurrency(mut self, concurrency: usize) -> Self {
        self.config.search.hydration_concurrency = concurrency;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Predefined configuration for development: debug logging, pretty output.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Predefined configuration for production: info logging as JSON lines.
    pub fn production() -> Self {
        Self::new()
            .with_log_level(LogLevel::Info)
            .with_log_format(LogFormat::Json)
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<FokalConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
