//! Transit departures gateway.
//!
//! A small HTTP gateway in front of the SL Trafiklab API: real-time
//! departures for a station, plus a station-name typeahead search with
//! an in-memory result cache.

pub mod cache;
pub mod config;
pub mod sl;
pub mod web;
