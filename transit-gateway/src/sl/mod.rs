//! SL Trafiklab API client.
//!
//! Two endpoints are used, both returning JSON bodies whose payload sits
//! under a `ResponseData` key:
//! - `realtimedeparturesV4.json` — live departures for a site id
//! - `typeahead.json` — station-name search

mod client;
mod error;

pub use client::{SlClient, SlConfig};
pub use error::SlError;
