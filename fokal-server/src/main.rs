use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use fokal_server::cli::CliArgs;
use fokal_server::config::ServerConfig;
use fokal_server::middleware::trace_requests;
use fokal_server::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli_args = CliArgs::parse();

    // Set up logging
    let filter = match &cli_args.log_level {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Fokal server v{}", fokal::VERSION);

    // Load configuration from CLI arguments and environment variables
    let server_config = ServerConfig::from_cli_and_env(cli_args)?;
    match &server_config.config_file {
        Some(path) => info!("Loading Fokal configuration from: {}", path.display()),
        None => info!("No config file provided, searching default locations"),
    }
    let fokal_config = server_config.load_fokal_config()?;

    let engine = fokal::init(fokal_config)?;
    info!(config = ?engine.config(), "Search engine initialized");

    let app_state = Arc::new(AppState::new(engine, server_config.clone()));

    // Create the router with all API endpoints
    let app = trace_requests(create_router(app_state).layer(CorsLayer::permissive()));

    // Start the server
    let addr = server_config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);
    info!("API documentation available at http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
