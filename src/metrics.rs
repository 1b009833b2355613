//! Fetch health metrics
//!
//! Tracks outcome counters per polled feed.

use std::time::Duration;

use tokio::sync::RwLock;

/// The two polled feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Prices,
    Trending,
}

/// Counters for one polled feed
#[derive(Debug, Clone, Default)]
pub struct FeedStats {
    /// Total fetch attempts (lifetime)
    pub total_fetches: u64,
    /// Failed fetch attempts (lifetime)
    pub failed_fetches: u64,
    /// Latency of the most recent fetch in milliseconds
    pub last_latency_ms: Option<u64>,
    /// Message of the most recent failure, cleared on success
    pub last_error: Option<String>,
}

impl FeedStats {
    /// Fraction of fetches that succeeded, 1.0 when nothing was fetched yet
    pub fn success_rate(&self) -> f64 {
        if self.total_fetches == 0 {
            return 1.0;
        }
        (self.total_fetches - self.failed_fetches) as f64 / self.total_fetches as f64
    }
}

/// Collects fetch outcomes for both feeds
pub struct FetchMetrics {
    prices: RwLock<FeedStats>,
    trending: RwLock<FeedStats>,
}

impl FetchMetrics {
    pub fn new() -> Self {
        Self {
            prices: RwLock::new(FeedStats::default()),
            trending: RwLock::new(FeedStats::default()),
        }
    }

    fn slot(&self, feed: Feed) -> &RwLock<FeedStats> {
        match feed {
            Feed::Prices => &self.prices,
            Feed::Trending => &self.trending,
        }
    }

    /// Records one fetch outcome
    pub async fn record(&self, feed: Feed, latency: Duration, error: Option<String>) {
        let mut stats = self.slot(feed).write().await;
        stats.total_fetches += 1;
        if error.is_some() {
            stats.failed_fetches += 1;
        }
        stats.last_latency_ms = Some(latency.as_millis() as u64);
        stats.last_error = error;
    }

    /// Current counters for a feed
    pub async fn stats(&self, feed: Feed) -> FeedStats {
        self.slot(feed).read().await.clone()
    }
}

impl Default for FetchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_outcomes_per_feed() {
        let metrics = FetchMetrics::new();

        metrics
            .record(Feed::Prices, Duration::from_millis(100), None)
            .await;
        metrics
            .record(
                Feed::Prices,
                Duration::from_millis(200),
                Some("timeout".to_string()),
            )
            .await;
        metrics
            .record(Feed::Trending, Duration::from_millis(50), None)
            .await;

        let prices = metrics.stats(Feed::Prices).await;
        assert_eq!(prices.total_fetches, 2);
        assert_eq!(prices.failed_fetches, 1);
        assert_eq!(prices.last_latency_ms, Some(200));
        assert_eq!(prices.last_error.as_deref(), Some("timeout"));
        assert!((prices.success_rate() - 0.5).abs() < f64::EPSILON);

        let trending = metrics.stats(Feed::Trending).await;
        assert_eq!(trending.total_fetches, 1);
        assert_eq!(trending.failed_fetches, 0);
        assert_eq!(trending.last_error, None);
    }

    #[tokio::test]
    async fn success_clears_last_error() {
        let metrics = FetchMetrics::new();
        metrics
            .record(
                Feed::Prices,
                Duration::from_millis(10),
                Some("boom".to_string()),
            )
            .await;
        metrics
            .record(Feed::Prices, Duration::from_millis(10), None)
            .await;

        assert_eq!(metrics.stats(Feed::Prices).await.last_error, None);
    }
}
