//! Caching layer for search results.
//!
//! The flight table is loaded once and never changes while the server runs,
//! so a report for a given set of parameters stays valid until the process
//! restarts. The TTL only bounds how long an unpopular entry holds memory.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::planner::{SearchParameters, TripReport};

/// Cached search report.
type ReportEntry = Arc<TripReport>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for search reports, keyed by the full set of search parameters.
pub struct SearchCache {
    reports: MokaCache<SearchParameters, ReportEntry>,
}

impl SearchCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let reports = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { reports }
    }

    /// Get a cached report.
    pub async fn get(&self, params: &SearchParameters) -> Option<ReportEntry> {
        self.reports.get(params).await
    }

    /// Insert a report into the cache.
    pub async fn insert(&self, params: SearchParameters, report: ReportEntry) {
        self.reports.insert(params, report).await;
    }

    /// Get cache statistics (for monitoring).
    ///
    /// Moka updates this lazily, so it may lag recent inserts.
    pub fn entry_count(&self) -> u64 {
        self.reports.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.reports.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AirportCode;

    fn params(bags: u32) -> SearchParameters {
        SearchParameters::new(
            AirportCode::parse("WIW").unwrap(),
            AirportCode::parse("RFZ").unwrap(),
        )
        .with_bags(bags)
    }

    fn report(found: usize) -> ReportEntry {
        Arc::new(TripReport {
            results: Vec::new(),
            itineraries_found: found,
            branches_explored: found * 2,
        })
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn cache_creation() {
        let cache = SearchCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_then_get() {
        let cache = SearchCache::new(&CacheConfig::default());
        cache.insert(params(1), report(3)).await;

        let hit = cache.get(&params(1)).await.unwrap();
        assert_eq!(hit.itineraries_found, 3);
    }

    #[tokio::test]
    async fn key_includes_every_parameter() {
        let cache = SearchCache::new(&CacheConfig::default());
        cache.insert(params(1), report(3)).await;

        assert!(cache.get(&params(2)).await.is_none());
        assert!(cache.get(&params(1).with_max_stops(1)).await.is_none());
        assert!(cache.get(&params(1).with_return_trip(true)).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears_entries() {
        let cache = SearchCache::new(&CacheConfig::default());
        cache.insert(params(0), report(1)).await;
        cache.invalidate_all();

        assert!(cache.get(&params(0)).await.is_none());
    }
}
