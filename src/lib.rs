//! # Crypto Dashboard
//!
//! A live cryptocurrency dashboard over the public CoinGecko API: BTC, ETH
//! and USDT prices in a local fiat currency (KES by default), a 24h-change
//! ticker, a fiat-to-crypto converter and the trending coin list.
//!
//! Prices refresh every 10 seconds and the trend list every 60 seconds; each
//! successful fetch replaces the previous state wholesale, and failures
//! degrade to a visible notice while prior valid prices stay on screen.
//!
//! ## Usage
//!
//! ```no_run
//! use crypto_dashboard::{Asset, Dashboard, DashboardConfig};
//!
//! # async fn example() {
//! let dashboard = Dashboard::new(DashboardConfig::default());
//! dashboard.start();
//!
//! // Convert KES 1000 to BTC using the latest fetched price
//! let amount = dashboard.convert("1000", Asset::BTC).await;
//! println!("BTC: {amount}");
//! # }
//! ```
//!
//! Display output goes through the [`render::DisplaySink`] trait; the
//! default [`render::ConsoleSink`] renders region updates as log lines.
//! Charting is delegated to a host-provided [`chart::ChartHost`].

pub mod chart;
pub mod clipboard;
pub mod constants;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod provider;
pub mod providers;
pub mod render;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use chart::{ChartConfig, ChartHost};
pub use clipboard::{Clipboard, SystemClipboard};
pub use dashboard::{Dashboard, DashboardConfig};
pub use error::{ClipboardError, FetchError};
pub use metrics::{Feed, FeedStats};
pub use provider::MarketDataProvider;
pub use providers::CoinGeckoProvider;
pub use render::{ConsoleSink, DisplaySink, Region};
pub use types::{Asset, AssetQuote, PriceSnapshot, TrendingCoin};
