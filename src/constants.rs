//! Constants for the crypto dashboard
//!
//! All configuration for the dashboard is centralized here. No runtime
//! configuration (config files, environment variables) is used - the system
//! operates with these compile-time constants, overridable per instance
//! through `DashboardConfig`.

use crate::types::Asset;

/// How often to fetch prices from the provider (in seconds)
pub const PRICE_REFRESH_INTERVAL_SECS: u64 = 10;

/// How often to fetch the trending coin list (in seconds)
pub const TREND_REFRESH_INTERVAL_SECS: u64 = 60;

/// HTTP request timeout when fetching data (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fiat currency all prices are quoted in by default
pub const DEFAULT_VS_CURRENCY: &str = "kes";

/// Maximum number of trending coins kept and rendered
pub const TREND_LIST_LEN: usize = 5;

/// Delay before the copy button label reverts to "Copy" (in milliseconds)
pub const COPY_RESET_DELAY_MS: u64 = 1200;

/// Assets shown on the dashboard
pub const ENABLED_ASSETS: &[Asset] = &[Asset::BTC, Asset::ETH, Asset::USDT];

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko API endpoint for simple price queries
pub const COINGECKO_SIMPLE_PRICE_ENDPOINT: &str = "/simple/price";

/// CoinGecko API endpoint for trending coins
pub const COINGECKO_TRENDING_ENDPOINT: &str = "/search/trending";

/// User agent for HTTP requests
pub const USER_AGENT: &str = "crypto-dashboard/0.1.0";
