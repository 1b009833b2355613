//! Error types for the crypto dashboard

use thiserror::Error;

/// Errors that can occur when fetching data from the market data provider
///
/// Fetch errors never propagate past the fetch boundary: the dashboard
/// catches them, renders a failure notice and leaves prior state untouched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid or unparsable response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider API returned a non-success status
    #[error("Provider API error: {0}")]
    Api(String),

    /// A required asset was missing from the response; the whole fetch is
    /// rejected rather than applied partially
    #[error("Asset missing from response: {0}")]
    MissingAsset(String),
}

/// Errors that can occur when copying to the system clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The clipboard backend rejected the write
    #[error("Clipboard error: {0}")]
    Backend(#[from] arboard::Error),

    /// No clipboard backend was configured for this dashboard instance
    #[error("No clipboard backend configured")]
    NotConfigured,
}
