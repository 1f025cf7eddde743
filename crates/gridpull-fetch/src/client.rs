//! HTTP client for window fetches.

use gridpull_types::{GridpullError, SeriesConfig, Window};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::accumulate::Page;
use crate::decode::{DecodeError, decode_response};
use crate::url::series_url;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: format!("gridpull/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching one window.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<FetchError> for GridpullError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Http(e) => Self::Http(e.to_string()),
            FetchError::ServerError { status } => {
                Self::Response(format!("server returned status {status}"))
            }
            FetchError::Decode(e) => Self::Response(e.to_string()),
        }
    }
}

/// One-request-per-window HTTP client.
///
/// Holds the series configuration and credential for the duration of a run.
/// Each window is fetched with exactly one request; there is no retry,
/// backoff, or concurrency, and the first failure propagates to the caller.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    series: SeriesConfig,
    api_key: String,
}

impl FetchClient {
    /// Creates a new fetch client for the given series and credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        series: SeriesConfig,
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            series,
            api_key: api_key.into(),
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults(
        series: SeriesConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Self::new(series, api_key, ClientConfig::default())
    }

    /// Returns the series this client fetches.
    #[must_use]
    pub const fn series(&self) -> &SeriesConfig {
        &self.series
    }

    /// Fetches the rows for one window with a single request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body. Nothing is retried.
    pub async fn fetch_window(&self, window: Window) -> Result<Page, FetchError> {
        let url = series_url(&self.series, window, &self.api_key);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let records = decode_response(&body)?;
        Ok(Page::new(window, records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("gridpull/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = FetchClient::with_defaults(SeriesConfig::tva_demand(), "k");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().series().respondent(), "TVA");
    }

    #[test]
    fn test_fetch_error_folding() {
        let folded: GridpullError = FetchError::ServerError { status: 403 }.into();
        assert!(matches!(folded, GridpullError::Response(_)));
        assert!(folded.to_string().contains("403"));
    }
}
