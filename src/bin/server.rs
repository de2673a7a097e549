//! Artist API Server Binary
//!
//! Starts the HTTP server for the Artist API.

use std::path::PathBuf;

use artist_api::{open_store, ArtistServer, Config, StoreConfig};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Artist API Server
#[derive(Parser, Debug)]
#[command(name = "artist-server")]
#[command(about = "REST service for Artist documents")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = Config::DEFAULT_PORT)]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Database connection string (memory:// or sled://<path>)
    #[arg(short, long, env = "DATABASE_URL", default_value = "sled://./artist_data")]
    database_url: StoreConfig,

    /// Directory served for unmatched paths
    #[arg(short, long, env = "STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,

    /// Allowed CORS origin
    #[arg(long, env = "CORS_ORIGIN", default_value = "*")]
    cors_origin: String,
}

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win
    let dotenv = dotenvy::dotenv();

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,artist_api=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let args = Args::parse();

    tracing::info!("Artist API Server v{}", artist_api::VERSION);
    tracing::info!("Database: {}", args.database_url);
    tracing::info!("Static directory: {}", args.static_dir.display());

    // Build config from args
    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .store(args.database_url)
        .static_dir(&args.static_dir)
        .cors_origin(&args.cors_origin)
        .build();

    // Open store
    let store = match open_store(&config.store) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Store initialized successfully");

    // Start server
    let server = match ArtistServer::bind(&config, store).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
