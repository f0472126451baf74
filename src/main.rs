//! Pokédex lookup proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ── GET /pokedex?id=…  ──▶ http  ──▶ pokedex client ──▶ PokeAPI
//!     Client ◀── flattened summary ──  http  ◀── typed record   ◀──
//!
//!     Cross-cutting: config, observability (tracing + metrics), lifecycle
//! ```
//!
//! One inbound request maps to exactly one outbound call; there is no cache,
//! no retry and no shared mutable state beyond the pooled HTTP client.

use clap::Parser;
use tokio::net::TcpListener;

use pokedex_proxy::config::{load_config, ProxyConfig};
use pokedex_proxy::http::HttpServer;
use pokedex_proxy::lifecycle::Shutdown;
use pokedex_proxy::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "pokedex-proxy")]
#[command(about = "Stateless lookup proxy over the public PokeAPI", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
