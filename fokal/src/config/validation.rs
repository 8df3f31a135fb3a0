//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &FokalConfig) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_catalog_config(&config.catalog)?;
    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.default_limit == 0 {
        return Err(ConfigError::ValidationError(
            "search.default_limit must be greater than 0".to_string(),
        ));
    }

    if config.max_limit == 0 {
        return Err(ConfigError::ValidationError(
            "search.max_limit must be greater than 0".to_string(),
        ));
    }

    if config.default_limit > config.max_limit {
        return Err(ConfigError::ValidationError(format!(
            "search.default_limit ({}) cannot exceed search.max_limit ({})",
            config.default_limit, config.max_limit
        )));
    }

    if !(0.0..=1.0).contains(&config.default_pixel_fraction) {
        return Err(ConfigError::ValidationError(format!(
            "search.default_pixel_fraction must be within [0, 1], got {}",
            config.default_pixel_fraction
        )));
    }

    if config.signal_oversample == 0 {
        return Err(ConfigError::ValidationError(
            "search.signal_oversample must be at least 1".to_string(),
        ));
    }

    if config.hydration_concurrency == 0 {
        return Err(ConfigError::ValidationError(
            "search.hydration_concurrency must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_catalog_config(config: &CatalogConfig) -> Result<(), ConfigError> {
    if !(config.color_max_distance.is_finite() && config.color_max_distance > 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "catalog.color_max_distance must be a positive number, got {}",
            config.color_max_distance
        )));
    }

    Ok(())
}
