//! Web layer for the departures gateway.
//!
//! Provides the HTTP endpoints: departure times, station search, health.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
