use clap::{Arg, ArgAction, Command, ValueHint};
use std::net::IpAddr;
use std::path::PathBuf;

/// CLI arguments for fokal-server
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub bind_address: Option<IpAddr>,
    pub config_file: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Self {
        let matches = command().get_matches();

        if matches.get_flag("help_env") {
            Self::print_env_help();
            std::process::exit(0);
        }

        Self {
            port: matches.get_one::<u16>("port").copied(),
            bind_address: matches.get_one::<IpAddr>("bind").copied(),
            config_file: matches.get_one::<PathBuf>("config").cloned(),
            catalog_path: matches.get_one::<PathBuf>("catalog").cloned(),
            log_level: matches.get_one::<String>("log_level").cloned(),
        }
    }

    /// Print comprehensive environment variable help
    fn print_env_help() {
        println!("Fokal Server Environment Variables");
        println!("==================================");
        println!();
        println!("Server Configuration:");
        println!("  FOKAL_PORT                          - Server port (default: 3000)");
        println!("  FOKAL_BIND_ADDRESS                  - Bind address (default: 0.0.0.0)");
        println!("  FOKAL_CONFIG_FILE                   - Path to config file (toml, yaml, json)");
        println!("  FOKAL_CATALOG_PATH                  - Photo catalog JSON file");
        println!();
        println!("Search (override the config file):");
        println!("  FOKAL_SEARCH__DEFAULT_LIMIT         - Limit when none is given (default: 500)");
        println!("  FOKAL_SEARCH__MAX_LIMIT             - Largest accepted limit (default: 500)");
        println!(
            "  FOKAL_SEARCH__DEFAULT_PIXEL_FRACTION - Colour coverage threshold (default: 0.005)"
        );
        println!("  FOKAL_SEARCH__SIGNAL_OVERSAMPLE     - Per-signal limit multiplier (default: 1)");
        println!("  FOKAL_SEARCH__HYDRATION_CONCURRENCY - Parallel photo fetches (default: 1)");
        println!("  FOKAL_CATALOG__COLOR_MAX_DISTANCE   - Max RGB distance for colour matches (default: 100)");
        println!();
        println!("Logging:");
        println!(
            "  RUST_LOG                            - Logging level (error, warn, info, debug, trace)"
        );
        println!();
        println!("Note: Command line arguments take precedence over environment variables.");
        println!("Use --help for CLI argument documentation.");
    }
}

fn command() -> Command {
    Command::new("fokal-server")
        .version(fokal::VERSION)
        .author("Fokal Contributors")
        .about("HTTP API server for Fokal photo search")
        .long_about(
            r#"Fokal Server exposes multi-signal photo search over HTTP. A search request
may combine a text query, a dominant colour and a geographic radius; the
matches from each are fused into a single ranking.

The server can be configured through command line arguments or environment
variables. Command line arguments take precedence over environment variables.

Examples:
  fokal-server --catalog data/catalog.json
  fokal-server --port 8080 --config fokal.toml --log-level debug"#,
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to listen on")
                .long_help(
                    "Port number for the HTTP server to listen on.
Environment variable: FOKAL_PORT",
                )
                .value_hint(ValueHint::Other)
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("bind")
                .short('b')
                .long("bind")
                .value_name("ADDRESS")
                .help("Address to bind to")
                .long_help(
                    "IP address for the HTTP server to bind to.
Environment variable: FOKAL_BIND_ADDRESS",
                )
                .value_parser(clap::value_parser!(IpAddr)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .long_help(
                    "Path to the configuration file (toml, yaml or json). It is merged
with defaults and FOKAL_* environment variables.
Environment variable: FOKAL_CONFIG_FILE",
                )
                .value_hint(ValueHint::FilePath)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("FILE")
                .help("Photo catalog JSON file")
                .long_help(
                    "JSON array of photos to serve. Overrides catalog.path from the
configuration file. Without a catalog the server starts empty.
Environment variable: FOKAL_CATALOG_PATH",
                )
                .value_hint(ValueHint::FilePath)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Logging level")
                .long_help(
                    "Set the logging level. Valid values: error, warn, info, debug, trace
Environment variable: RUST_LOG",
                )
                .value_parser(["error", "warn", "info", "debug", "trace"]),
        )
        .arg(
            Arg::new("help_env")
                .long("help-env")
                .help("Show all environment variables")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_parse_values() {
        let matches = command()
            .try_get_matches_from([
                "fokal-server",
                "--port",
                "8081",
                "--bind",
                "::1",
                "--catalog",
                "photos.json",
                "--log-level",
                "debug",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<u16>("port"), Some(&8081));
        assert_eq!(
            matches.get_one::<IpAddr>("bind"),
            Some(&"::1".parse::<IpAddr>().unwrap())
        );
        assert_eq!(
            matches.get_one::<PathBuf>("catalog"),
            Some(&PathBuf::from("photos.json"))
        );
        assert!(
            command()
                .try_get_matches_from(["fokal-server", "--log-level", "loud"])
                .is_err()
        );
    }
}
