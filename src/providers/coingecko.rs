//! CoinGecko market data provider implementation

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    constants::{
        COINGECKO_API_URL, COINGECKO_SIMPLE_PRICE_ENDPOINT, COINGECKO_TRENDING_ENDPOINT,
        REQUEST_TIMEOUT_SECS, USER_AGENT,
    },
    error::FetchError,
    provider::MarketDataProvider,
    types::{Asset, AssetQuote, PriceUpdate, TrendingCoin},
};

/// CoinGecko API response for simple price queries
///
/// The per-coin field names depend on the requested currency
/// (`<cur>`, `<cur>_24h_change`), so each coin is kept as a raw field map.
#[derive(Debug, Deserialize)]
struct SimplePriceResponse {
    #[serde(flatten)]
    coins: HashMap<String, HashMap<String, f64>>,
}

/// CoinGecko API response for trending coins
#[derive(Debug, Deserialize)]
struct TrendingResponse {
    coins: Vec<TrendingEntry>,
}

#[derive(Debug, Deserialize)]
struct TrendingEntry {
    item: TrendingItem,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    name: String,
    symbol: String,
    small: String,
    market_cap_rank: Option<u32>,
}

/// CoinGecko market data provider
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    /// Creates a new CoinGecko provider
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self { client })
    }

    /// Builds the CoinGecko API URL for fetching prices
    fn build_price_url(&self, assets: &[Asset], vs_currency: &str) -> String {
        let ids = assets
            .iter()
            .map(|a| a.coingecko_id())
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}{}?ids={}&vs_currencies={}&include_24hr_change=true&include_last_updated_at=true",
            COINGECKO_API_URL, COINGECKO_SIMPLE_PRICE_ENDPOINT, ids, vs_currency
        )
    }

    /// Parses the simple price response into a complete price update
    ///
    /// All-or-nothing: a response missing any requested asset or its price
    /// field is rejected so a partial response never reaches the store. The
    /// 24h change is optional and stays absent when omitted. A missing
    /// `last_updated_at` falls back to the local clock.
    fn parse_price_response(
        &self,
        response: SimplePriceResponse,
        assets: &[Asset],
        vs_currency: &str,
    ) -> Result<PriceUpdate, FetchError> {
        let change_key = format!("{vs_currency}_24h_change");
        let mut quotes = HashMap::new();
        let mut last_updated = None;

        for asset in assets {
            let fields = response
                .coins
                .get(asset.coingecko_id())
                .ok_or_else(|| FetchError::MissingAsset(asset.symbol().to_string()))?;

            let price = fields
                .get(vs_currency)
                .copied()
                .ok_or_else(|| FetchError::MissingAsset(asset.symbol().to_string()))?;

            let change_24h = fields.get(&change_key).copied();

            if last_updated.is_none() {
                last_updated = fields.get("last_updated_at").map(|ts| *ts as i64);
            }

            quotes.insert(*asset, AssetQuote { price, change_24h });
        }

        Ok(PriceUpdate {
            quotes,
            last_updated: last_updated.unwrap_or_else(|| Utc::now().timestamp()),
        })
    }

    /// Maps the trending response to the dashboard's coin type, keeping the
    /// API's rank order
    fn parse_trending_response(&self, response: TrendingResponse) -> Vec<TrendingCoin> {
        response
            .coins
            .into_iter()
            .map(|entry| TrendingCoin {
                name: entry.item.name,
                symbol: entry.item.symbol,
                icon_url: entry.item.small,
                market_cap_rank: entry.item.market_cap_rank,
            })
            .collect()
    }

    /// Issues a GET and returns the response body, surfacing rate limiting
    /// and non-success statuses as errors
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        if response.status().as_u16() == 429 {
            return Err(FetchError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(FetchError::Api(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response.text().await.map_err(FetchError::Network)
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new().expect("Failed to create CoinGecko provider")
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_prices(
        &self,
        assets: &[Asset],
        vs_currency: &str,
    ) -> Result<PriceUpdate, FetchError> {
        let url = self.build_price_url(assets, vs_currency);
        tracing::debug!(%url, "Fetching prices from CoinGecko");

        let response_text = self.get_text(&url).await?;

        let response: SimplePriceResponse = serde_json::from_str(&response_text).map_err(|e| {
            FetchError::InvalidResponse(format!(
                "Failed to parse CoinGecko price response: {}. Response: {}",
                e, response_text
            ))
        })?;

        let update = self.parse_price_response(response, assets, vs_currency)?;

        tracing::debug!(
            count = update.quotes.len(),
            "Successfully fetched prices from CoinGecko"
        );

        Ok(update)
    }

    async fn fetch_trending(&self) -> Result<Vec<TrendingCoin>, FetchError> {
        let url = format!("{}{}", COINGECKO_API_URL, COINGECKO_TRENDING_ENDPOINT);
        tracing::debug!(%url, "Fetching trending coins from CoinGecko");

        let response_text = self.get_text(&url).await?;

        let response: TrendingResponse = serde_json::from_str(&response_text).map_err(|e| {
            FetchError::InvalidResponse(format!(
                "Failed to parse CoinGecko trending response: {}. Response: {}",
                e, response_text
            ))
        })?;

        let coins = self.parse_trending_response(response);

        tracing::debug!(
            count = coins.len(),
            "Successfully fetched trending coins from CoinGecko"
        );

        Ok(coins)
    }

    fn provider_name(&self) -> &'static str {
        "coingecko"
    }
}
