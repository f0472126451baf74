//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, middleware)
//!     → request.rs (request ID generation)
//!     → pokedex handler (validate → upstream call → reshape)
//!     → JSON response (summary or {"error": ...})
//! ```

pub mod request;
pub mod server;

pub use request::UuidRequestId;
pub use server::{AppState, HttpServer};
