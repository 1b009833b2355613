//! In-memory dashboard state

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    constants::TREND_LIST_LEN,
    types::{ConversionInput, PriceSnapshot, PriceUpdate, TrendingCoin},
};

#[derive(Default)]
struct StateInner {
    snapshot: PriceSnapshot,
    trending: Vec<TrendingCoin>,
    conversion: ConversionInput,
}

/// Shared mutable state behind the dashboard
///
/// One lock guards the whole state so each update is atomic with respect to
/// its fetch: a price update replaces the entire snapshot or nothing, and a
/// trend update replaces the entire list or clears it. Concurrent in-flight
/// fetches resolve by completion order (last write wins).
pub struct DashboardState {
    inner: Arc<RwLock<StateInner>>,
}

impl DashboardState {
    /// Creates empty state: no prices, no trend list, blank converter input
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StateInner::default())),
        }
    }

    /// Replaces the price snapshot wholesale with a fetched update
    pub async fn apply_price_update(&self, update: PriceUpdate) {
        let mut inner = self.inner.write().await;
        inner.snapshot = PriceSnapshot {
            quotes: update.quotes,
            last_updated: Some(update.last_updated),
        };
    }

    /// The current price snapshot
    pub async fn snapshot(&self) -> PriceSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// Replaces the trend list wholesale, keeping the first entries in the
    /// provider's order up to the supported length
    ///
    /// Returns the stored list.
    pub async fn set_trending(&self, mut coins: Vec<TrendingCoin>) -> Vec<TrendingCoin> {
        coins.truncate(TREND_LIST_LEN);
        let mut inner = self.inner.write().await;
        inner.trending = coins;
        inner.trending.clone()
    }

    /// Drops the trend list entirely (no stale partial list survives a
    /// failed trend fetch)
    pub async fn clear_trending(&self) {
        self.inner.write().await.trending.clear();
    }

    /// The current trend list, in rank order
    pub async fn trending(&self) -> Vec<TrendingCoin> {
        self.inner.read().await.trending.clone()
    }

    /// Records the latest converter input
    pub async fn set_conversion_input(&self, input: ConversionInput) {
        self.inner.write().await.conversion = input;
    }

    /// The latest converter input
    pub async fn conversion_input(&self) -> ConversionInput {
        self.inner.read().await.conversion.clone()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
