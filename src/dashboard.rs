//! Dashboard service
//!
//! Owns the shared state and drives the poll/render cycle: prices every
//! 10 seconds, trending coins every 60 seconds, first tick immediately.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::{interval, sleep};
use tracing::{info, warn};

use crate::{
    chart::{ChartConfig, ChartHost},
    clipboard::{Clipboard, SystemClipboard},
    constants::{
        COPY_RESET_DELAY_MS, DEFAULT_VS_CURRENCY, ENABLED_ASSETS, PRICE_REFRESH_INTERVAL_SECS,
        TREND_REFRESH_INTERVAL_SECS,
    },
    convert,
    error::{ClipboardError, FetchError},
    metrics::{Feed, FeedStats, FetchMetrics},
    provider::MarketDataProvider,
    providers::CoinGeckoProvider,
    render::{
        last_updated_line, price_label, ticker_line, trend_list_text, ConsoleSink, DisplaySink,
        Region, COPIED_LABEL, COPY_LABEL, PRICE_FAILURE_NOTICE, TREND_FAILURE_NOTICE,
    },
    store::DashboardState,
    types::{Asset, ConversionInput, PriceSnapshot, TrendingCoin},
};

/// Per-instance configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Fiat currency all prices are quoted in
    pub vs_currency: String,
    /// Price poll period
    pub price_refresh: Duration,
    /// Trending list poll period
    pub trend_refresh: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            price_refresh: Duration::from_secs(PRICE_REFRESH_INTERVAL_SECS),
            trend_refresh: Duration::from_secs(TREND_REFRESH_INTERVAL_SECS),
        }
    }
}

/// Everything a fetch task needs, cloned into each spawned tick
#[derive(Clone)]
struct FetchContext {
    config: DashboardConfig,
    state: Arc<DashboardState>,
    provider: Arc<dyn MarketDataProvider>,
    sink: Arc<dyn DisplaySink>,
    metrics: Arc<FetchMetrics>,
}

/// Live crypto dashboard
///
/// Polls the market data provider on two independent cadences and projects
/// the resulting state onto the display sink. Fetch failures degrade to a
/// visible notice and leave prior valid price data untouched.
///
/// # Example
/// ```no_run
/// use crypto_dashboard::{Dashboard, DashboardConfig};
///
/// # async fn example() {
/// let dashboard = Dashboard::new(DashboardConfig::default());
/// dashboard.start();
/// # }
/// ```
pub struct Dashboard {
    context: FetchContext,
    clipboard: Option<Arc<dyn Clipboard>>,
    chart_host: Option<Arc<dyn ChartHost>>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Dashboard {
    /// Creates a dashboard backed by CoinGecko, rendering to the console
    /// sink and copying through the system clipboard
    pub fn new(config: DashboardConfig) -> Self {
        let mut dashboard = Self::with_components(
            config,
            Arc::new(CoinGeckoProvider::default()),
            Arc::new(ConsoleSink),
        );
        dashboard.clipboard = Some(Arc::new(SystemClipboard));
        dashboard
    }

    /// Creates a dashboard with a custom provider and sink
    ///
    /// No clipboard or chart host is attached; tests use this to construct
    /// isolated instances.
    pub fn with_components(
        config: DashboardConfig,
        provider: Arc<dyn MarketDataProvider>,
        sink: Arc<dyn DisplaySink>,
    ) -> Self {
        Self {
            context: FetchContext {
                config,
                state: Arc::new(DashboardState::new()),
                provider,
                sink,
                metrics: Arc::new(FetchMetrics::new()),
            },
            clipboard: None,
            chart_host: None,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Attaches a host-provided chart widget
    pub fn set_chart_host(&mut self, host: Arc<dyn ChartHost>) {
        self.chart_host = Some(host);
    }

    /// Replaces the clipboard backend
    pub fn set_clipboard(&mut self, clipboard: Arc<dyn Clipboard>) {
        self.clipboard = Some(clipboard);
    }

    /// Mounts charts and starts the two poll loops
    ///
    /// Both loops fire immediately, then on their fixed cadence,
    /// independently of each other and of in-flight fetches.
    pub fn start(&self) {
        if let Some(host) = &self.chart_host {
            for asset in ENABLED_ASSETS {
                host.mount(&ChartConfig::for_asset(*asset));
            }
        }

        let mut tasks = self.tasks.lock().expect("task registry poisoned");
        tasks.push(Self::spawn_feed_loop(
            self.context.clone(),
            Feed::Prices,
            self.context.config.price_refresh,
        ));
        tasks.push(Self::spawn_feed_loop(
            self.context.clone(),
            Feed::Trending,
            self.context.config.trend_refresh,
        ));
    }

    /// Stops the poll loops; in-flight requests are abandoned
    pub fn shutdown(&self) {
        let mut tasks = self.tasks.lock().expect("task registry poisoned");
        for task in tasks.drain(..) {
            task.abort();
        }
    }

    fn spawn_feed_loop(context: FetchContext, feed: Feed, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                feed = ?feed,
                period_secs = period.as_secs(),
                provider = context.provider.provider_name(),
                "Starting dashboard poll loop"
            );

            let mut ticker = interval(period);
            loop {
                ticker.tick().await;

                // Ticks never wait for the previous fetch: overlapping
                // fetches race and the last completion wins.
                let context = context.clone();
                tokio::spawn(async move {
                    let _ = match feed {
                        Feed::Prices => Self::fetch_prices_once(&context).await,
                        Feed::Trending => Self::fetch_trending_once(&context).await,
                    };
                });
            }
        })
    }

    /// Fetches prices and applies them, or renders the failure notice
    ///
    /// The snapshot is replaced all-or-nothing; on any failure the prior
    /// snapshot stays visible and only the ticker region changes.
    async fn fetch_prices_once(context: &FetchContext) -> Result<(), FetchError> {
        let start = Instant::now();

        match context
            .provider
            .fetch_prices(ENABLED_ASSETS, &context.config.vs_currency)
            .await
        {
            Ok(update) => {
                context
                    .metrics
                    .record(Feed::Prices, start.elapsed(), None)
                    .await;
                context.state.apply_price_update(update).await;
                Self::render_price_regions(context).await;
                Ok(())
            }
            Err(e) => {
                context
                    .metrics
                    .record(Feed::Prices, start.elapsed(), Some(e.to_string()))
                    .await;
                warn!(
                    error = %e,
                    provider = context.provider.provider_name(),
                    "Failed to fetch prices"
                );
                context.sink.update(Region::Ticker, PRICE_FAILURE_NOTICE);
                Err(e)
            }
        }
    }

    /// Fetches the trend list and replaces it, or clears it and renders the
    /// failure notice
    async fn fetch_trending_once(context: &FetchContext) -> Result<(), FetchError> {
        let start = Instant::now();

        match context.provider.fetch_trending().await {
            Ok(coins) => {
                context
                    .metrics
                    .record(Feed::Trending, start.elapsed(), None)
                    .await;
                let stored = context.state.set_trending(coins).await;
                context
                    .sink
                    .update(Region::TrendList, &trend_list_text(&stored));
                Ok(())
            }
            Err(e) => {
                context
                    .metrics
                    .record(Feed::Trending, start.elapsed(), Some(e.to_string()))
                    .await;
                warn!(
                    error = %e,
                    provider = context.provider.provider_name(),
                    "Failed to fetch trending coins"
                );
                context.state.clear_trending().await;
                context.sink.update(Region::TrendList, TREND_FAILURE_NOTICE);
                Err(e)
            }
        }
    }

    async fn render_price_regions(context: &FetchContext) {
        let snapshot = context.state.snapshot().await;

        for asset in ENABLED_ASSETS {
            let quote = snapshot.quote(*asset).unwrap_or_default();
            context.sink.update(
                Region::PriceLabel(*asset),
                &price_label(*asset, quote, &context.config.vs_currency),
            );
        }

        context.sink.update(
            Region::Ticker,
            &ticker_line(&snapshot, ENABLED_ASSETS, &context.config.vs_currency),
        );
        context
            .sink
            .update(Region::LastUpdated, &last_updated_line(snapshot.last_updated));

        Self::render_converted(context, &snapshot).await;
    }

    /// Re-derives the converted amount from the stored input and renders it
    async fn render_converted(context: &FetchContext, snapshot: &PriceSnapshot) -> String {
        let input = context.state.conversion_input().await;
        let amount = convert::parse_amount(&input.amount);
        let value = convert::convert(amount, snapshot.price(input.asset));
        let text = convert::format_converted(value);
        context.sink.update(Region::ConvertedAmount, &text);
        text
    }

    /// Forces an immediate price fetch, bypassing the cadence
    pub async fn refresh_prices_now(&self) -> Result<(), FetchError> {
        Self::fetch_prices_once(&self.context).await
    }

    /// Forces an immediate trend fetch, bypassing the cadence
    pub async fn refresh_trending_now(&self) -> Result<(), FetchError> {
        Self::fetch_trending_once(&self.context).await
    }

    /// Converts a local-currency amount into the selected asset
    ///
    /// Stores the input (so price updates re-render it), updates the
    /// converted-amount region and returns the rendered quantity. Malformed
    /// input and unknown prices both render the zero sentinel.
    pub async fn convert(&self, amount: &str, asset: Asset) -> String {
        self.context
            .state
            .set_conversion_input(ConversionInput {
                amount: amount.to_string(),
                asset,
            })
            .await;

        let snapshot = self.context.state.snapshot().await;
        Self::render_converted(&self.context, &snapshot).await
    }

    /// Copies the currently rendered converted amount to the clipboard
    ///
    /// Flips the copy-button label to "Copied!" and reverts it after 1.2
    /// seconds.
    pub async fn copy_converted(&self) -> Result<(), ClipboardError> {
        let clipboard = self
            .clipboard
            .clone()
            .ok_or(ClipboardError::NotConfigured)?;

        let snapshot = self.context.state.snapshot().await;
        let text = Self::render_converted(&self.context, &snapshot).await;
        clipboard.set_text(&text)?;

        self.context.sink.update(Region::CopyButton, COPIED_LABEL);

        let sink = self.context.sink.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(COPY_RESET_DELAY_MS)).await;
            sink.update(Region::CopyButton, COPY_LABEL);
        });

        Ok(())
    }

    /// The current price snapshot
    pub async fn snapshot(&self) -> PriceSnapshot {
        self.context.state.snapshot().await
    }

    /// The current trend list
    pub async fn trending(&self) -> Vec<TrendingCoin> {
        self.context.state.trending().await
    }

    /// Fetch counters for one feed
    pub async fn fetch_stats(&self, feed: Feed) -> FeedStats {
        self.context.metrics.stats(feed).await
    }

    /// Returns the name of the configured provider
    pub fn provider_name(&self) -> &'static str {
        self.context.provider.provider_name()
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.shutdown();
    }
}
