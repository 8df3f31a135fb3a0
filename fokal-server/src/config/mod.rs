//! Server configuration module

use anyhow::{Context, Result};
use fokal::config::{ConfigBuilder, ConfigLoader, FokalConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Address to bind to
    pub bind_address: IpAddr,

    /// Fokal configuration file (toml, yaml or json); default locations are
    /// searched when unset
    pub config_file: Option<PathBuf>,

    /// Photo catalog file, overrides `catalog.path` from the configuration file
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            config_file: None,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from CLI arguments and environment variables
    /// CLI arguments take precedence over environment variables
    pub fn from_cli_and_env(cli_args: crate::cli::CliArgs) -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = cli_args.port {
            config.port = port;
        } else if let Ok(port) = env::var("FOKAL_PORT") {
            config.port = port.parse().context("FOKAL_PORT must be a port number")?;
        }

        if let Some(bind_address) = cli_args.bind_address {
            config.bind_address = bind_address;
        } else if let Ok(bind_address) = env::var("FOKAL_BIND_ADDRESS") {
            config.bind_address = bind_address
                .parse()
                .context("FOKAL_BIND_ADDRESS must be an IP address")?;
        }

        if let Some(config_file) = cli_args.config_file {
            config.config_file = Some(config_file);
        } else if let Ok(config_file) = env::var("FOKAL_CONFIG_FILE") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        if let Some(catalog_path) = cli_args.catalog_path {
            config.catalog_path = Some(catalog_path);
        } else if let Ok(catalog_path) = env::var("FOKAL_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(catalog_path));
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Resolve the library configuration: defaults, then the configuration
    /// file, then `FOKAL_*` environment variables, then the catalog override.
    pub fn load_fokal_config(&self) -> Result<FokalConfig> {
        let mut loader = ConfigLoader::new();
        match &self.config_file {
            Some(path) => {
                loader
                    .load_file(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?;
            }
            None => {
                loader.load_default_files();
            }
        }
        loader.load_env();

        let mut builder = ConfigBuilder::from_config(loader.extract()?);
        if let Some(catalog_path) = &self.catalog_path {
            builder = builder.with_catalog_path(catalog_path);
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliArgs;

    #[test]
    fn test_cli_args_take_precedence() {
        let args = CliArgs {
            port: Some(8080),
            bind_address: Some("127.0.0.1".parse().unwrap()),
            config_file: None,
            catalog_path: Some(PathBuf::from("photos.json")),
            log_level: None,
        };

        let config = ServerConfig::from_cli_and_env(args).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.catalog_path, Some(PathBuf::from("photos.json")));
    }

    #[test]
    fn test_load_fokal_config_applies_catalog_override() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("fokal.toml");
        std::fs::write(
            &file,
            "[search]\ndefault_limit = 20\n\n[catalog]\npath = \"from-file.json\"\n",
        )
        .unwrap();

        let server = ServerConfig {
            config_file: Some(file),
            catalog_path: Some(PathBuf::from("override.json")),
            ..Default::default()
        };

        let config = server.load_fokal_config().unwrap();
        assert_eq!(config.search.default_limit, 20);
        assert_eq!(config.catalog.path, Some(PathBuf::from("override.json")));
    }

    #[test]
    fn test_load_fokal_config_missing_file_fails() {
        let server = ServerConfig {
            config_file: Some(PathBuf::from("/nonexistent/fokal.toml")),
            ..Default::default()
        };
        assert!(server.load_fokal_config().is_err());
    }
}
