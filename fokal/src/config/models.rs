//! Configuration model definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Fokal.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FokalConfig {
    /// Search pipeline configuration
    pub search: SearchConfig,

    /// Reference catalog configuration
    pub catalog: CatalogConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Tunables for the multi-signal search pipeline.
///
/// With the defaults every signal is queried with the request limit and
/// hydration runs one photo at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Limit used when the request has no usable `limit` parameter
    pub default_limit: usize,

    /// Upper bound applied to any requested limit
    pub max_limit: usize,

    /// Pixel fraction threshold used when `pixel_fraction` is missing or invalid
    pub default_pixel_fraction: f64,

    /// Multiplier on the request limit when querying each signal.
    ///
    /// `1` truncates every signal to the final result size before fusion, so a
    /// photo ranked just outside one signal's top-K never gets credit for it.
    /// Larger values over-fetch per signal and let cross-signal corroboration
    /// pull such photos back into the final ranking.
    pub signal_oversample: usize,

    /// Maximum hydration calls in flight at once; output order is unaffected
    pub hydration_concurrency: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 500,
            max_limit: 500,
            default_pixel_fraction: 0.005,
            signal_oversample: 1,
            hydration_concurrency: 1,
        }
    }
}

/// Configuration for the in-memory reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding the photo records; empty catalog when unset
    pub path: Option<PathBuf>,

    /// RGB distance beyond which a dominant colour no longer matches
    pub color_max_distance: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            color_max_distance: 100.0,
        }
    }
}

/// Configuration for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// Human-friendly multi-line format
    Pretty,

    /// Single-line format
    Compact,

    /// JSON lines
    Json,
}
