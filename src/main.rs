//! Book service entry point.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use book_service::api::{create_router, AppState};
use book_service::config::Config;
use book_service::datastore::DatastoreClient;
use book_service::metrics;
use book_service::utils::shutdown_signal;

/// Book service: HTTP front-end for the datastore service.
#[derive(Parser, Debug)]
#[command(name = "book-service")]
#[command(about = "Forwards book CRUD requests to the datastore service")]
#[command(version)]
struct Args {
    /// Port to listen on.
    port: u16,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments; a missing port exits non-zero with usage.
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("book_service=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration
    info!("Loading configuration...");
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Datastore base URL: {}", config.datastore_url);

    // Initialize metrics
    let metrics_handle = metrics::install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;
    metrics::init_metrics();

    // Create app state
    let datastore = DatastoreClient::new(&config);
    let state = AppState::new(datastore, metrics_handle);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
