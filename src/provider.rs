//! Provider abstraction for fetching market data from external APIs

use async_trait::async_trait;

use crate::{
    error::FetchError,
    types::{Asset, PriceUpdate, TrendingCoin},
};

/// Trait for market data providers
///
/// Implementations fetch current prices and the trending coin list from an
/// external source (CoinGecko by default).
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches current prices for the given assets in one request
    ///
    /// # Arguments
    /// * `assets` - Assets to fetch; a response missing any of them is an error
    /// * `vs_currency` - Fiat currency code the prices are quoted in
    ///
    /// # Returns
    /// A complete price update, or an error if the fetch or parse fails
    async fn fetch_prices(
        &self,
        assets: &[Asset],
        vs_currency: &str,
    ) -> Result<PriceUpdate, FetchError>;

    /// Fetches the trending coin list in the provider's rank order
    async fn fetch_trending(&self) -> Result<Vec<TrendingCoin>, FetchError>;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}
