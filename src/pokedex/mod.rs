//! Pokédex domain logic.
//!
//! # Data Flow
//! ```text
//! identifier (normalized by the handler)
//!     → client.rs (single GET to PokeAPI, bounded timeouts)
//!     → types.rs (typed deserialization of the upstream record)
//!     → types.rs (flatten into PokemonSummary)
//! ```

pub mod client;
pub mod types;

pub use client::PokeApiClient;
pub use types::{PokemonRecord, PokemonSummary};
