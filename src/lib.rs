//! Pokédex lookup proxy library.
//!
//! A stateless server-side proxy in front of the public PokeAPI: one inbound
//! lookup request becomes exactly one outbound call, and the nested upstream
//! record is flattened into a small display-ready JSON object.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pokedex;

pub use config::ProxyConfig;
pub use error::LookupError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
