//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, request timeout, request ID)
//! - Dispatch `/pokedex` lookups to the upstream client
//! - Serve the static landing page and liveness probe
//! - Graceful shutdown via the lifecycle coordinator

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::error::LookupError;
use crate::http::request::UuidRequestId;
use crate::observability::metrics;
use crate::pokedex::{PokeApiClient, PokemonSummary};

/// Application state injected into handlers.
///
/// The upstream client is built once and cloned per handler invocation;
/// handlers share nothing else, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub client: PokeApiClient,
}

/// HTTP server for the lookup proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let client = PokeApiClient::new(&config.upstream)?;
        let state = AppState { client };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route("/pokedex", get(pokedex_handler))
            .route("/inicio", get(inicio_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Core lookup handler: validate, fetch the upstream record, reshape, respond.
async fn pokedex_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PokemonSummary>, LookupError> {
    let start = Instant::now();

    let identifier = params.get("id").map(|s| s.trim()).unwrap_or_default();
    if identifier.is_empty() {
        metrics::record_lookup(400, start);
        return Err(LookupError::InvalidInput);
    }

    // One normalization policy, applied at the single call site: PokeAPI only
    // resolves lowercase name tokens.
    let identifier = identifier.to_lowercase();

    tracing::debug!(identifier = %identifier, "Looking up pokemon");

    match state.client.fetch_pokemon(&identifier).await {
        Ok(record) => {
            metrics::record_lookup(200, start);
            Ok(Json(PokemonSummary::from(record)))
        }
        Err(err) => {
            tracing::warn!(identifier = %identifier, error = %err, "Lookup failed");
            metrics::record_lookup(err.status().as_u16(), start);
            Err(err)
        }
    }
}

/// Static landing page, the equivalent of the old `/inicio` forward.
async fn inicio_handler() -> Html<&'static str> {
    Html(include_str!("../../static/inicio.html"))
}

/// Liveness probe.
async fn health_handler() -> &'static str {
    "ok"
}
