//! Search configuration for the trip finder.

use chrono::Duration;

/// Configuration parameters for trip search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest acceptable layover (minutes, inclusive).
    pub min_connection_mins: i64,

    /// Longest acceptable layover (minutes, inclusive).
    pub max_connection_mins: i64,

    /// Maximum number of partial itineraries the search may expand.
    /// `None` leaves the search unbounded; exceeding a limit is an error,
    /// never a silently shortened result.
    pub max_branches: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_connection_mins: i64,
        max_connection_mins: i64,
        max_branches: Option<usize>,
    ) -> Self {
        Self {
            min_connection_mins,
            max_connection_mins,
            max_branches,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_connection(&self) -> Duration {
        Duration::minutes(self.max_connection_mins)
    }

    /// Returns true if a layover of `gap` is inside the connection window.
    pub fn accepts_connection(&self, gap: Duration) -> bool {
        gap >= self.min_connection() && gap <= self.max_connection()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 60,  // 1 hour
            max_connection_mins: 360, // 6 hours
            max_branches: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection_mins, 60);
        assert_eq!(config.max_connection_mins, 360);
        assert_eq!(config.max_branches, None);
    }

    #[test]
    fn duration_methods() {
        let config = SearchConfig::default();

        assert_eq!(config.min_connection(), Duration::seconds(3600));
        assert_eq!(config.max_connection(), Duration::seconds(21_600));
    }

    #[test]
    fn window_is_inclusive() {
        let config = SearchConfig::default();

        assert!(!config.accepts_connection(Duration::seconds(3599)));
        assert!(config.accepts_connection(Duration::seconds(3600)));
        assert!(config.accepts_connection(Duration::hours(3)));
        assert!(config.accepts_connection(Duration::seconds(21_600)));
        assert!(!config.accepts_connection(Duration::seconds(21_601)));
        assert!(!config.accepts_connection(Duration::minutes(-90)));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(30, 120, Some(500));

        assert_eq!(config.min_connection(), Duration::minutes(30));
        assert_eq!(config.max_connection(), Duration::minutes(120));
        assert_eq!(config.max_branches, Some(500));
    }
}
