//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, SearchCache};
use crate::domain::Flight;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The flight table is loaded before the server starts and is read-only
/// from then on.
#[derive(Clone)]
pub struct AppState {
    /// Flights to search, in table order
    pub flights: Arc<Vec<Arc<Flight>>>,

    /// Trip search configuration
    pub config: Arc<SearchConfig>,

    /// Cached search reports
    pub cache: Arc<SearchCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(flights: Vec<Arc<Flight>>, config: SearchConfig, cache_config: &CacheConfig) -> Self {
        Self {
            flights: Arc::new(flights),
            config: Arc::new(config),
            cache: Arc::new(SearchCache::new(cache_config)),
        }
    }
}
