//! jmerge web service - main entry point.
//!
//! Serves the upload form and the export/preview endpoints. All
//! conversion logic lives in `jmerge-convert`; this binary only wires
//! HTTP plumbing around it.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use jmerge_config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod handlers;
mod routes;

/// Command-line arguments for jmerge-web
#[derive(Parser, Debug)]
#[command(name = "jmerge-web")]
#[command(about = "Combine uploaded JSON files into CSV, XLSX, or aggregated JSON")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "JMERGE_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    let mut loader = ConfigLoader::new();
    loader
        .load_dotenv()
        .context("Failed to load .env file")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jmerge_web=debug,jmerge_convert=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Some(port) = args.port {
        loader = loader.with_port(port);
    }
    let config = loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .build();

    info!("Starting jmerge on port {}", config.port);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = routes::router(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown on ctrl-c.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    info!("Shutdown signal received");
}
