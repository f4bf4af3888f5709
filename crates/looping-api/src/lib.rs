//! looping-api: HTTP API layer for the looping calculator
//!
//! Provides a JSON API that re-runs the calculator on every request.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;
