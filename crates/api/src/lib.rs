//! Tate report server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! report pipeline) so integration tests and both binaries can share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod report;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod telemetry;
