//! Shared upstream client.
//!
//! One reqwest client is built at startup and cloned into every handler;
//! reqwest clients pool connections internally and are safe for concurrent
//! use, so no further coordination is needed. Both timeouts are bounded so a
//! stalled upstream cannot pin a request forever.

use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::error::LookupError;
use crate::pokedex::types::PokemonRecord;

/// Client for the PokeAPI `pokemon` endpoint.
#[derive(Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a single record by identifier (numeric id or name token).
    ///
    /// The caller normalizes the identifier; this composes the URL as-is.
    pub async fn fetch_pokemon(&self, identifier: &str) -> Result<PokemonRecord, LookupError> {
        let url = format!("{}/pokemon/{}", self.base_url, identifier);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Internal(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), identifier, "Upstream miss");
            return Err(LookupError::NotFound);
        }

        response.json::<PokemonRecord>().await.map_err(|e| {
            if e.is_decode() {
                LookupError::UpstreamParse(e.to_string())
            } else {
                LookupError::Internal(e.to_string())
            }
        })
    }
}
