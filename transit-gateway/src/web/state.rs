//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::SearchCache;
use crate::sl::SlClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Upstream SL API client
    pub sl: Arc<SlClient>,

    /// Station search result cache
    pub search_cache: SearchCache,
}

impl AppState {
    /// Create a new app state.
    pub fn new(sl: SlClient, search_cache: SearchCache) -> Self {
        Self {
            sl: Arc::new(sl),
            search_cache,
        }
    }
}
