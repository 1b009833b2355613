//! Types for the crypto dashboard

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Supported cryptocurrency assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    /// Bitcoin
    #[default]
    BTC,
    /// Ethereum
    ETH,
    /// Tether
    USDT,
}

impl Asset {
    /// Get the asset symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Asset::BTC => "BTC",
            Asset::ETH => "ETH",
            Asset::USDT => "USDT",
        }
    }

    /// Get the CoinGecko ID for this asset
    pub fn coingecko_id(&self) -> &'static str {
        match self {
            Asset::BTC => "bitcoin",
            Asset::ETH => "ethereum",
            Asset::USDT => "tether",
        }
    }

    /// Get the TradingView trading pair for this asset's chart
    pub fn tradingview_symbol(&self) -> &'static str {
        match self {
            Asset::BTC => "BINANCE:BTCUSDT",
            Asset::ETH => "BINANCE:ETHUSDT",
            Asset::USDT => "USDTUSD",
        }
    }

    /// Get all supported assets
    pub fn all() -> &'static [Asset] {
        &[Asset::BTC, Asset::ETH, Asset::USDT]
    }
}

/// A single asset's quoted price in the local currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetQuote {
    /// Price in the configured local currency
    pub price: f64,

    /// 24h price change percentage, absent when the API omits it
    pub change_24h: Option<f64>,
}

/// The current prices for the supported asset set
///
/// Replaced wholesale on each successful price fetch; empty until the first
/// success. No history is retained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Quote per asset; contains entries only for the supported set
    pub quotes: HashMap<Asset, AssetQuote>,

    /// Unix seconds of the last successful update, absent until first success
    pub last_updated: Option<i64>,
}

impl PriceSnapshot {
    /// The quote for an asset, if present
    pub fn quote(&self, asset: Asset) -> Option<AssetQuote> {
        self.quotes.get(&asset).copied()
    }

    /// The price for an asset, usable as a divisor
    ///
    /// A missing or non-positive price is unknown and returns `None`.
    pub fn price(&self, asset: Asset) -> Option<f64> {
        self.quotes
            .get(&asset)
            .map(|q| q.price)
            .filter(|p| *p > 0.0)
    }

    /// True before the first successful fetch
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// The parsed result of one successful price fetch
///
/// Carries quotes for the complete enabled asset set; a response missing any
/// required asset is rejected by the provider before this type is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdate {
    /// Quote per fetched asset
    pub quotes: HashMap<Asset, AssetQuote>,

    /// Unix seconds the provider reported, or the local clock when absent
    pub last_updated: i64,
}

/// One entry of the trending coin list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    /// Coin display name
    pub name: String,

    /// Coin ticker symbol
    pub symbol: String,

    /// URL of the coin's small icon
    pub icon_url: String,

    /// Market cap rank, absent for unranked coins
    pub market_cap_rank: Option<u32>,
}

/// The last user-supplied converter input
///
/// Kept so the converted amount can be re-rendered on every price update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionInput {
    /// Raw amount text as the user typed it
    pub amount: String,

    /// Selected asset to convert into
    pub asset: Asset,
}
