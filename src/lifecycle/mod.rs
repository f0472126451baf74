//! Lifecycle management.
//!
//! Startup order: config → logging → listener → metrics → server.
//! Shutdown: SIGINT triggers the coordinator, the serve loop drains and exits.

pub mod shutdown;

pub use shutdown::Shutdown;
